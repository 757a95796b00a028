//! Session setup loader: configuration plus player roster in one file.
//!
//! ```toml
//! [game]
//! difficulty = "hard"
//! board_size = 40
//! seed = 7
//!
//! [[players]]
//! name = "Aria"
//! class = "mage"
//! ```

use std::path::Path;

use mystic_core::{GameConfig, PlayerSetup};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Everything needed to call `GameSession::from_config`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSetup {
    pub game: GameConfig,
    pub players: Vec<PlayerSetup>,
}

/// Loader for session setup TOML files.
pub struct SetupLoader;

impl SetupLoader {
    pub fn load(path: &Path) -> LoadResult<SessionSetup> {
        let content = read_file(path)?;
        let setup = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            path = %path.display(),
            players = setup.players.len(),
            difficulty = %setup.game.difficulty,
            "loaded session setup"
        );
        Ok(setup)
    }

    /// Parse setup TOML. Roster size is checked when the session starts.
    pub fn parse(content: &str) -> LoadResult<SessionSetup> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse setup TOML: {}", e))
    }
}
