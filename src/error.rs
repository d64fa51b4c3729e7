//! Error types shared across the game

use std::io;
use std::path::PathBuf;

/// Result type for the game
pub type Result<T> = std::result::Result<T, GameError>;

/// Everything that can go wrong, from a typo at the prompt to a broken stats file.
///
/// The first three variants are recoverable: the caller reports them and
/// asks again. The persistence variants are surfaced to the player.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("invalid menu selection: {0:?}")]
    InvalidMenuSelection(String),

    #[error("invalid difficulty selection: {0:?}")]
    InvalidDifficultySelection(String),

    #[error("not a whole number: {0:?}")]
    InvalidGuessFormat(String),

    #[error("statistics file {} is corrupted: {reason}", .path.display())]
    CorruptPersistedState { path: PathBuf, reason: String },

    #[error("could not read statistics file {}: {source}", .path.display())]
    PersistenceReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not save statistics to {}: {source}", .path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("secret {secret} is outside 1..={range_max}")]
    SecretOutOfRange { secret: u32, range_max: u32 },

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}
