//! Guess the Number - a terminal guessing game with persistent statistics
//!
//! Core modules:
//! - `difficulty`: Fixed catalog of ranges and attempt budgets
//! - `round`: Guessing state machine for a single round
//! - `stats`: History, totals and the summary view
//! - `persistence`: JSON stats file load/save
//! - `ui`: Console abstraction and the main menu loop
//! - `config`: Stats location and RNG seed

pub mod config;
pub mod difficulty;
pub mod error;
pub mod persistence;
pub mod round;
pub mod stats;
pub mod ui;

pub use config::Config;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use persistence::StatsStore;
pub use round::{GuessFeedback, Round, RoundOutcome, RoundPhase};
pub use stats::{GameRecord, StatsState, StatsSummary};
