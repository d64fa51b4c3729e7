//! Guess the Number entry point
//!
//! Loads configuration and stats, then hands control to the menu loop.

use std::process::ExitCode;

use guess_the_number::ui::{App, Terminal};
use guess_the_number::{Config, StatsStore};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> guess_the_number::Result<()> {
    let config = Config::from_env();
    log::info!("Guess the Number starting (stats: {})", config.stats_path.display());

    let store = StatsStore::new(config.stats_path.clone());
    let stats = store.load()?;

    let mut app = App::new(Terminal::stdio(), store, stats, config.rng());
    app.run()
}
