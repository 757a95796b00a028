//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use mystic_content::{SessionSetup, SetupLoader};
use mystic_core::Difficulty;

/// Settings that shape a session before it starts.
///
/// Every field is optional; unset values fall back to the setup file and
/// then to [`GameConfig`](mystic_core::GameConfig) defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub setup_file: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub board_size: Option<usize>,
    pub seed: Option<u64>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MYSTIC_SETUP_FILE` - TOML file with `[game]` and `[[players]]` tables
    /// - `MYSTIC_DIFFICULTY` - `easy`, `medium` or `hard` (case-insensitive)
    /// - `MYSTIC_BOARD_SIZE` - Number of tiles, start and final included
    /// - `MYSTIC_SEED` - Seed for a reproducible game
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            setup_file: lookup("MYSTIC_SETUP_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            difficulty: read_value(&lookup, "MYSTIC_DIFFICULTY"),
            board_size: read_value(&lookup, "MYSTIC_BOARD_SIZE"),
            seed: read_value(&lookup, "MYSTIC_SEED"),
        }
    }

    /// Load the setup file (if any) and apply environment overrides.
    pub fn load_setup(&self) -> Result<SessionSetup> {
        let setup = match &self.setup_file {
            Some(path) => SetupLoader::load(path)
                .with_context(|| format!("loading setup file {}", path.display()))?,
            None => SessionSetup::default(),
        };

        Ok(self.apply(setup))
    }

    /// Environment values win over file values.
    pub fn apply(&self, mut setup: SessionSetup) -> SessionSetup {
        if let Some(difficulty) = self.difficulty {
            setup.game.difficulty = difficulty;
        }
        if let Some(board_size) = self.board_size {
            setup.game.board_size = board_size;
        }
        if let Some(seed) = self.seed {
            setup.game.seed = Some(seed);
        }
        setup
    }
}

fn read_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment value");
            None
        }
    }
}
