//! Difficulty presets
//!
//! A fixed catalog: each level bundles a guess range and an attempt budget.

/// Difficulty levels, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every level, ordered by menu key
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Menu key the player types to pick this level
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "1",
            Difficulty::Medium => "2",
            Difficulty::Hard => "3",
        }
    }

    /// Display name, also written to the stats file
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Upper bound of the secret (lower bound is always 1)
    pub fn range_max(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 50,
            Difficulty::Hard => 100,
        }
    }

    /// Counted guesses allowed per round
    pub fn attempt_budget(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 7,
            Difficulty::Hard => 10,
        }
    }

    /// Look up a level by menu key. Surrounding whitespace is ignored.
    pub fn select(input: &str) -> Option<Self> {
        let key = input.trim();
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// One-line description for the selection menu
    pub fn describe(&self) -> String {
        format!(
            "{}. {} (1-{}, attempts: {})",
            self.key(),
            self.name(),
            self.range_max(),
            self.attempt_budget()
        )
    }
}
