//! A single guessing round
//!
//! The round is a small state machine. It starts in `AwaitingGuess` with no
//! attempts spent and ends in `Won` or `Lost`. Only guesses that parse as
//! integers count against the attempt budget.

use std::cmp::Ordering;
use std::num::IntErrorKind;

use rand::Rng;

use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the next guess
    AwaitingGuess { attempts: u32 },
    /// Secret found on the given attempt
    Won { attempts: u32 },
    /// Budget spent without a match
    Lost,
}

/// What the player is told after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    /// The secret is higher than the guess
    Higher,
    /// The secret is lower than the guess
    Lower,
    /// The guess matched
    Correct,
    /// The round had already ended; nothing changed
    RoundOver,
}

/// Final result of a round, handed to the stats aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub difficulty: Difficulty,
    pub won: bool,
    pub attempts_used: u32,
}

#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    secret: u32,
    phase: RoundPhase,
}

impl Round {
    /// Start a round with a secret drawn uniformly from `1..=range_max`
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let secret = rng.random_range(1..=difficulty.range_max());
        log::debug!("New {} round", difficulty.name());
        Self {
            difficulty,
            secret,
            phase: RoundPhase::AwaitingGuess { attempts: 0 },
        }
    }

    /// Start a round with a known secret (replays and tests)
    pub fn with_secret(difficulty: Difficulty, secret: u32) -> Result<Self> {
        if !(1..=difficulty.range_max()).contains(&secret) {
            return Err(GameError::SecretOutOfRange {
                secret,
                range_max: difficulty.range_max(),
            });
        }
        Ok(Self {
            difficulty,
            secret,
            phase: RoundPhase::AwaitingGuess { attempts: 0 },
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.phase, RoundPhase::AwaitingGuess { .. })
    }

    /// Counted attempts so far
    pub fn attempts_used(&self) -> u32 {
        match self.phase {
            RoundPhase::AwaitingGuess { attempts } | RoundPhase::Won { attempts } => attempts,
            RoundPhase::Lost => self.difficulty.attempt_budget(),
        }
    }

    /// Submit raw text from the player.
    ///
    /// Text that is not an integer returns `InvalidGuessFormat` and leaves
    /// the round untouched. Integers too large for `i64` still count; they
    /// saturate, which keeps the comparison with any secret correct.
    pub fn submit(&mut self, input: &str) -> Result<GuessFeedback> {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Ok(self.guess(value)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(self.guess(i64::MAX)),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(self.guess(i64::MIN)),
            Err(_) => {
                log::debug!("Rejected guess {trimmed:?}");
                Err(GameError::InvalidGuessFormat(trimmed.to_string()))
            }
        }
    }

    /// Apply a parsed guess. Every call on a live round costs one attempt.
    pub fn guess(&mut self, value: i64) -> GuessFeedback {
        let RoundPhase::AwaitingGuess { attempts } = self.phase else {
            return GuessFeedback::RoundOver;
        };
        let attempts = attempts + 1;

        let feedback = match value.cmp(&i64::from(self.secret)) {
            Ordering::Equal => GuessFeedback::Correct,
            Ordering::Less => GuessFeedback::Higher,
            Ordering::Greater => GuessFeedback::Lower,
        };

        self.phase = match feedback {
            GuessFeedback::Correct => RoundPhase::Won { attempts },
            _ if attempts >= self.difficulty.attempt_budget() => RoundPhase::Lost,
            _ => RoundPhase::AwaitingGuess { attempts },
        };
        log::debug!("Guess {value} -> {feedback:?}, phase {:?}", self.phase);

        feedback
    }

    /// The outcome, once the round has ended
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let won = match self.phase {
            RoundPhase::AwaitingGuess { .. } => return None,
            RoundPhase::Won { .. } => true,
            RoundPhase::Lost => false,
        };
        Some(RoundOutcome {
            difficulty: self.difficulty,
            won,
            attempts_used: self.attempts_used(),
        })
    }
}
