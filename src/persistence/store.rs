//! File-backed stats store

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{GameError, Result};
use crate::stats::StatsState;

/// File name used when nothing else is configured
pub const DEFAULT_STATS_FILE: &str = "guessing_game_stats.json";

/// Reads and writes the whole stats file in one go
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl Default for StatsStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_FILE)
    }
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stats file. A missing file yields an empty history.
    pub fn load(&self) -> Result<StatsState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No stats at {}, starting fresh", self.path.display());
                return Ok(StatsState::new());
            }
            Err(source) => {
                return Err(GameError::PersistenceReadFailure {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let state: StatsState =
            serde_json::from_str(&json).map_err(|e| self.corrupt(e.to_string()))?;
        state.validate().map_err(|reason| self.corrupt(reason))?;

        log::info!(
            "Loaded {} games from {}",
            state.games.len(),
            self.path.display()
        );
        Ok(state)
    }

    /// Replace the stats file with `state`
    pub fn save(&self, state: &StatsState) -> Result<()> {
        self.write_atomic(state)
            .map_err(|source| GameError::PersistenceWriteFailure {
                path: self.path.clone(),
                source,
            })?;
        log::info!(
            "Stats saved to {} ({} games)",
            self.path.display(),
            state.games.len()
        );
        Ok(())
    }

    fn write_atomic(&self, state: &StatsState) -> io::Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        state.serialize(&mut ser)?;

        let tmp = self.temp_path();
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(&buf)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn corrupt(&self, reason: String) -> GameError {
        GameError::CorruptPersistedState {
            path: self.path.clone(),
            reason,
        }
    }
}
