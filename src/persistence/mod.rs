//! Save/load of the statistics file
//!
//! Features:
//! - Pretty JSON in the format older versions of the game wrote
//! - Missing file means a fresh history
//! - Totals are validated on load; mismatches are reported as corruption
//! - Saves go to a temporary sibling first, then rename over the target

pub mod store;

pub use store::{DEFAULT_STATS_FILE, StatsStore};
