//! Cross-session statistics
//!
//! History is append-only. Totals are kept alongside the list because the
//! file format carries them; `validate` checks the two agree and that each
//! record is possible.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::Result;
use crate::persistence::StatsStore;
use crate::round::RoundOutcome;

/// How many games the summary lists
pub const RECENT_GAMES: usize = 5;

/// Timestamp layout used in the stats file
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Local time the round finished, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    /// Difficulty display name
    pub difficulty: String,
    pub won: bool,
    pub attempts_used: u32,
    #[serde(rename = "max_attempts")]
    pub attempt_budget: u32,
    #[serde(rename = "range")]
    pub range_max: u32,
}

impl GameRecord {
    pub fn new(difficulty: Difficulty, won: bool, attempts_used: u32, date: String) -> Self {
        Self {
            date,
            difficulty: difficulty.name().to_string(),
            won,
            attempts_used,
            attempt_budget: difficulty.attempt_budget(),
            range_max: difficulty.range_max(),
        }
    }

    /// Table row for the statistics screen (without the index)
    pub fn summary_line(&self) -> String {
        let result = if self.won { "Win" } else { "Loss" };
        format!(
            "{} | {} | {} ({}/{})",
            self.date, self.difficulty, result, self.attempts_used, self.attempt_budget
        )
    }
}

/// Full persisted history plus running totals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsState {
    pub games: Vec<GameRecord>,
    pub total_wins: u64,
    pub total_games: u64,
}

/// Read-only view for the statistics screen
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_games: u64,
    pub total_wins: u64,
    /// Fraction in `0.0..=1.0`
    pub win_rate: f64,
    /// Last few games, oldest first
    pub recent: Vec<GameRecord>,
}

impl StatsSummary {
    pub fn win_rate_percent(&self) -> f64 {
        self.win_rate * 100.0
    }
}

impl StatsState {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Append a record and bump the totals
    pub fn push(&mut self, record: GameRecord) {
        self.total_games += 1;
        if record.won {
            self.total_wins += 1;
        }
        self.games.push(record);
    }

    /// Check each record and the totals against the history
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (i, game) in self.games.iter().enumerate() {
            if game.range_max == 0 || game.attempt_budget == 0 {
                return Err(format!("game {i} has an empty range or attempt budget"));
            }
            if game.attempts_used > game.attempt_budget {
                return Err(format!(
                    "game {i} used {} of {} attempts",
                    game.attempts_used, game.attempt_budget
                ));
            }
        }
        let games = self.games.len() as u64;
        if self.total_games != games {
            return Err(format!(
                "total_games is {} but {} games are recorded",
                self.total_games, games
            ));
        }
        let wins = self.games.iter().filter(|g| g.won).count() as u64;
        if self.total_wins != wins {
            return Err(format!(
                "total_wins is {} but {} recorded games were won",
                self.total_wins, wins
            ));
        }
        Ok(())
    }

    /// Compute the statistics view
    pub fn summarize(&self) -> StatsSummary {
        let win_rate = if self.total_games == 0 {
            0.0
        } else {
            self.total_wins as f64 / self.total_games as f64
        };
        let start = self.games.len().saturating_sub(RECENT_GAMES);
        StatsSummary {
            total_games: self.total_games,
            total_wins: self.total_wins,
            win_rate,
            recent: self.games[start..].to_vec(),
        }
    }
}

/// Add a finished round to the history and write it through to disk.
///
/// The in-memory state keeps the new record even when the save fails, so
/// the next successful save still includes it.
pub fn record(state: &mut StatsState, store: &StatsStore, outcome: &RoundOutcome) -> Result<()> {
    let date = chrono::Local::now().format(DATE_FORMAT).to_string();
    state.push(GameRecord::new(
        outcome.difficulty,
        outcome.won,
        outcome.attempts_used,
        date,
    ));
    log::info!(
        "Recorded {} {} in {} attempts ({} games total)",
        outcome.difficulty.name(),
        if outcome.won { "win" } else { "loss" },
        outcome.attempts_used,
        state.total_games
    );
    store.save(state)
}
