//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default high-score file, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "highscores.json";

/// Name recorded when neither `BLOCKFALL_PLAYER` nor `USER` is set
pub const DEFAULT_PLAYER: &str = "player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// RNG seed for the piece sequence
    pub seed: u32,
    pub scores_path: PathBuf,
    pub player: String,
    /// Log file; logging stays off when unset
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let scores_path = get("BLOCKFALL_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));

        let player = get("BLOCKFALL_PLAYER")
            .or_else(|| get("USER"))
            .unwrap_or_else(|| DEFAULT_PLAYER.to_string());

        let log_path = get("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            scores_path,
            player,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
