//! Runtime configuration
//!
//! Defaults suit a normal game; environment variables override them.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::persistence::DEFAULT_STATS_FILE;

/// Overrides the stats file location
pub const ENV_STATS_FILE: &str = "GUESS_STATS_FILE";
/// Fixes the RNG seed (u64) for reproducible secrets
pub const ENV_SEED: &str = "GUESS_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where statistics are persisted
    pub stats_path: PathBuf,
    /// RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_FILE),
            seed: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_STATS_FILE).filter(|p| !p.trim().is_empty()) {
            config.stats_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {ENV_SEED}={raw:?}: not a u64"),
            }
        }

        config
    }

    /// Generator for secrets, seeded per `seed`
    pub fn rng(&self) -> Pcg32 {
        match self.seed {
            Some(seed) => {
                log::info!("Using fixed seed {seed}");
                Pcg32::seed_from_u64(seed)
            }
            None => Pcg32::from_rng(&mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.stats_path, PathBuf::from("guessing_game_stats.json"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_STATS_FILE, "/tmp/my_stats.json"),
            (ENV_SEED, " 42 "),
        ]));
        assert_eq!(config.stats_path, PathBuf::from("/tmp/my_stats.json"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_bad_values_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_STATS_FILE, "  "), (ENV_SEED, "abc")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = Config {
            seed: Some(7),
            ..Default::default()
        };
        let a: u32 = config.rng().random();
        let b: u32 = config.rng().random();
        assert_eq!(a, b);
    }
}
