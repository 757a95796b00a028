//! Game configuration constants, difficulty presets and tunable parameters.

/// Difficulty preset chosen at game start.
///
/// Difficulty fixes every player's maximum HP and scales HP effects drawn
/// from the effect catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Numeric parameters derived from a [`Difficulty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultySettings {
    /// Maximum (and starting) HP for every player.
    pub max_hp: i32,
    /// HP effect multiplier, in percent (100 = unscaled).
    pub intensity_percent: i32,
}

impl Difficulty {
    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                max_hp: 150,
                intensity_percent: 70,
            },
            Difficulty::Medium => DifficultySettings {
                max_hp: 100,
                intensity_percent: 100,
            },
            Difficulty::Hard => DifficultySettings {
                max_hp: 75,
                intensity_percent: 130,
            },
        }
    }

    pub const fn max_hp(self) -> i32 {
        self.settings().max_hp
    }

    pub const fn intensity_percent(self) -> i32 {
        self.settings().intensity_percent
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Number of tiles on the track, including start and final.
    pub board_size: usize,
    /// Seed for the default random source. `None` lets the caller pick one.
    pub seed: Option<u64>,
}

impl GameConfig {
    // ===== rule constants =====
    pub const MIN_PLAYERS: usize = 2;
    pub const MIN_BOARD_SIZE: usize = 2;
    pub const DIE_SIDES: u32 = 6;

    /// Cooldown set by a cast. It ticks at the start of each own turn, so
    /// the spell is unavailable for the next 5 turns and ready on the 6th.
    pub const SPELL_COOLDOWN: u32 = 6;
    pub const CHARGE_BONUS: u32 = 3;
    pub const IMMUNITY_CHARGES: u32 = 2;
    pub const SHIELD_GAIN: i32 = 10;
    pub const HEAL_AMOUNT: i32 = 10;

    /// Passives are unavailable this many tiles (or fewer) from the final tile.
    pub const PASSIVE_CUTOFF: usize = 10;

    pub const FINAL_CHALLENGE_TARGET: u32 = 5;
    /// Direct HP loss on a failed final challenge; shields do not apply.
    pub const FINAL_CHALLENGE_PENALTY: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: usize = 40;

    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::default(),
            board_size: Self::DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_presets_match_rules() {
        assert_eq!(Difficulty::Easy.max_hp(), 150);
        assert_eq!(Difficulty::Medium.max_hp(), 100);
        assert_eq!(Difficulty::Hard.max_hp(), 75);
        assert_eq!(Difficulty::Easy.intensity_percent(), 70);
        assert_eq!(Difficulty::Hard.intensity_percent(), 130);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn defaults_to_medium_forty_tiles() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.board_size, 40);
        assert_eq!(config.seed, None);
    }
}
