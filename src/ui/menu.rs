//! Main menu loop
//!
//! Owns the stats history for the session and dispatches each menu choice
//! to the screen that handles it. Input mistakes re-prompt; end of input
//! ends the session as if the player chose Exit.

use rand::Rng;

use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::persistence::StatsStore;
use crate::round::{GuessFeedback, Round, RoundOutcome};
use crate::stats::{self, StatsState};

use super::console::Console;

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

const RULES_TEXT: [&str; 5] = [
    "- The computer picks a secret number within a range.",
    "- You have a limited number of attempts to guess it.",
    "- After each guess, you get a hint: 'higher' or 'lower'.",
    "- Higher difficulty means wider range and fewer attempts.",
    "- Your stats are saved between sessions.",
];

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Statistics,
    Rules,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::NewGame,
        MenuChoice::Statistics,
        MenuChoice::Rules,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::NewGame => "1",
            MenuChoice::Statistics => "2",
            MenuChoice::Rules => "3",
            MenuChoice::Exit => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::NewGame => "New Game",
            MenuChoice::Statistics => "Statistics",
            MenuChoice::Rules => "Game Rules",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let key = input.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| GameError::InvalidMenuSelection(key.to_string()))
    }
}

/// Whether the session goes on after a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session
pub struct App<C, R> {
    console: C,
    store: StatsStore,
    stats: StatsState,
    rng: R,
}

impl<C: Console, R: Rng> App<C, R> {
    /// `stats` should be what `store` loaded at startup
    pub fn new(console: C, store: StatsStore, stats: StatsState, rng: R) -> Self {
        Self {
            console,
            store,
            stats,
            rng,
        }
    }

    pub fn stats(&self) -> &StatsState {
        &self.stats
    }

    /// Hand back the console and final stats
    pub fn into_parts(self) -> (C, StatsState) {
        (self.console, self.stats)
    }

    /// Run the menu until the player exits or input ends
    pub fn run(&mut self) -> Result<()> {
        self.console.write_line("Welcome to Guess the Number!")?;

        loop {
            self.show_menu()?;
            let Some(input) = self.console.prompt("Choose an option (1-4): ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&input) {
                Ok(MenuChoice::NewGame) => self.new_game()?,
                Ok(MenuChoice::Statistics) => self.show_stats()?,
                Ok(MenuChoice::Rules) => self.show_rules()?,
                Ok(MenuChoice::Exit) => Flow::Quit,
                Err(e) => {
                    log::warn!("{e}");
                    self.console
                        .write_line("Invalid input. Please choose 1, 2, 3, or 4.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.console.write_line("Thanks for playing! See you next time!")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.write_line("")?;
        self.console.write_line(RULE)?;
        self.console.write_line("       GUESS THE NUMBER GAME")?;
        self.console.write_line(RULE)?;
        for choice in MenuChoice::ALL {
            self.console
                .write_line(&format!("{}. {}", choice.key(), choice.label()))?;
        }
        self.console.write_line(THIN_RULE)?;
        Ok(())
    }

    /// Ask until a valid difficulty arrives; `None` at end of input
    fn select_difficulty(&mut self) -> Result<Option<Difficulty>> {
        self.console.write_line("\nSelect difficulty level:")?;
        for difficulty in Difficulty::ALL {
            self.console.write_line(&difficulty.describe())?;
        }

        loop {
            let Some(input) = self.console.prompt("Your choice (1-3): ")? else {
                return Ok(None);
            };
            match Difficulty::select(&input) {
                Some(difficulty) => return Ok(Some(difficulty)),
                None => {
                    log::warn!("{}", GameError::InvalidDifficultySelection(input));
                    self.console
                        .write_line("Invalid choice. Please enter 1, 2, or 3.")?;
                }
            }
        }
    }

    fn new_game(&mut self) -> Result<Flow> {
        let Some(difficulty) = self.select_difficulty()? else {
            return Ok(Flow::Quit);
        };
        let round = Round::new(difficulty, &mut self.rng);
        self.play(round)
    }

    /// Play `round` to the end, report it and record it.
    ///
    /// A failed save is shown to the player and the session continues.
    pub fn play(&mut self, mut round: Round) -> Result<Flow> {
        let Some(outcome) = self.play_round(&mut round)? else {
            return Ok(Flow::Quit);
        };

        match stats::record(&mut self.stats, &self.store, &outcome) {
            Ok(()) => {}
            Err(e @ GameError::PersistenceWriteFailure { .. }) => {
                log::error!("{e}");
                self.console
                    .write_line(&format!("Warning: your result was not saved ({e})."))?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    /// Guess loop. `None` if input ended mid-round.
    fn play_round(&mut self, round: &mut Round) -> Result<Option<RoundOutcome>> {
        let difficulty = round.difficulty();
        let budget = difficulty.attempt_budget();

        self.console.write_line(&format!(
            "\nI've picked a number between 1 and {}.",
            difficulty.range_max()
        ))?;
        self.console.write_line(&format!("You have {budget} attempts."))?;

        while !round.is_over() {
            let prompt = format!(
                "Attempt {}/{}. Your guess: ",
                round.attempts_used() + 1,
                budget
            );
            let Some(input) = self.console.prompt(&prompt)? else {
                log::info!("Input ended mid-round; round discarded");
                return Ok(None);
            };

            let message = match round.submit(&input) {
                Ok(GuessFeedback::Correct) => format!(
                    "Congratulations! You guessed {} in {} attempts!",
                    round.secret(),
                    round.attempts_used()
                ),
                Ok(GuessFeedback::Higher) => "The secret number is higher.".to_string(),
                Ok(GuessFeedback::Lower) => "The secret number is lower.".to_string(),
                Ok(GuessFeedback::RoundOver) => break,
                Err(GameError::InvalidGuessFormat(_)) => {
                    "Please enter a valid integer.".to_string()
                }
                Err(e) => return Err(e),
            };
            self.console.write_line(&message)?;
        }

        let outcome = round.outcome();
        if let Some(RoundOutcome { won: false, .. }) = outcome {
            self.console.write_line(&format!(
                "Out of attempts! The secret number was: {}",
                round.secret()
            ))?;
        }
        Ok(outcome)
    }

    fn show_stats(&mut self) -> Result<Flow> {
        if self.stats.is_empty() {
            self.console
                .write_line("\nNo games played yet. Play a few rounds first!")?;
        } else {
            let summary = self.stats.summarize();
            self.console.write_line("")?;
            self.console.write_line(THIN_RULE)?;
            self.console.write_line("GAME STATISTICS")?;
            self.console.write_line(THIN_RULE)?;
            self.console
                .write_line(&format!("Total games: {}", summary.total_games))?;
            self.console
                .write_line(&format!("Wins: {}", summary.total_wins))?;
            self.console
                .write_line(&format!("Win rate: {:.1}%", summary.win_rate_percent()))?;
            self.console
                .write_line(&format!("\nRecent {} games:", stats::RECENT_GAMES))?;
            for (i, game) in summary.recent.iter().enumerate() {
                self.console
                    .write_line(&format!("{}. {}", i + 1, game.summary_line()))?;
            }
        }
        self.press_enter("\nPress Enter to return to menu...")
    }

    fn show_rules(&mut self) -> Result<Flow> {
        self.console.write_line("\nGAME RULES:")?;
        for line in RULES_TEXT {
            self.console.write_line(line)?;
        }
        self.press_enter("\nPress Enter to continue...")
    }

    fn press_enter(&mut self, prompt: &str) -> Result<Flow> {
        match self.console.prompt(prompt)? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Quit),
        }
    }
}
