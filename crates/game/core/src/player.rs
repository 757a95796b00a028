//! Player entities and class definitions.

use crate::config::Difficulty;

/// Selectable adventurer class. Fixes the active spell and passive budget.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum PlayerClass {
    /// Charge: next roll moves 3 extra tiles.
    Warrior,
    /// Immunity: the next 2 landings have no effect.
    Mage,
    /// Shield: gain 10 shield points.
    Tank,
    /// Heal: restore 10 HP.
    Healer,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 4] = [
        PlayerClass::Warrior,
        PlayerClass::Mage,
        PlayerClass::Tank,
        PlayerClass::Healer,
    ];

    /// Number of passive skips a fresh player of this class holds.
    pub const fn passive_uses(self) -> u32 {
        match self {
            PlayerClass::Warrior => 3,
            PlayerClass::Mage => 2,
            PlayerClass::Tank => 1,
            PlayerClass::Healer => 2,
        }
    }

    pub const fn spell_name(self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Charge",
            PlayerClass::Mage => "Immunity",
            PlayerClass::Tank => "Shield",
            PlayerClass::Healer => "Heal",
        }
    }

    pub const fn passive_name(self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Strike",
            PlayerClass::Mage => "Fireball",
            PlayerClass::Tank => "Shield Block",
            PlayerClass::Healer => "Speed Enchantment",
        }
    }
}

/// Raw player entry as collected by a setup form or roster file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSetup {
    pub name: String,
    pub class: PlayerClass,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, class: PlayerClass) -> Self {
        Self {
            name: name.into(),
            class,
        }
    }
}

/// A player on the board.
///
/// Players are never removed: an eliminated player keeps its slot with
/// `hp == 0` and is skipped by turn rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub class: PlayerClass,
    pub position: usize,
    pub hp: i32,
    pub max_hp: i32,
    pub shield: i32,
    /// Own turns left before the spell can be cast again.
    pub spell_cooldown: u32,
    /// Warrior Charge armed for the next movement roll.
    pub spell_active: bool,
    /// Tile landings left whose effects are ignored.
    pub immunity_turns: u32,
    /// The next action of this player is forfeited.
    pub skip_turn: bool,
    pub passive_count: u32,
}

impl Player {
    /// Create a fresh player at the start tile with full HP.
    ///
    /// The name is stored trimmed.
    pub fn new(name: &str, class: PlayerClass, difficulty: Difficulty) -> Self {
        let max_hp = difficulty.max_hp();
        Self {
            name: name.trim().to_string(),
            class,
            position: 0,
            hp: max_hp,
            max_hp,
            shield: 0,
            spell_cooldown: 0,
            spell_active: false,
            immunity_turns: 0,
            skip_turn: false,
            passive_count: class.passive_uses(),
        }
    }

    pub fn from_setup(setup: &PlayerSetup, difficulty: Difficulty) -> Self {
        Self::new(&setup.name, setup.class, difficulty)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn can_cast(&self) -> bool {
        self.spell_cooldown == 0
    }

    /// Start-of-turn bookkeeping: tick the spell cooldown down by one.
    pub fn begin_turn(&mut self) {
        self.spell_cooldown = self.spell_cooldown.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_budget_depends_on_class() {
        let budgets: Vec<u32> = PlayerClass::ALL.iter().map(|c| c.passive_uses()).collect();
        assert_eq!(budgets, vec![3, 2, 1, 2]);
    }

    #[test]
    fn new_player_starts_fresh() {
        let player = Player::new("  Ayla ", PlayerClass::Tank, Difficulty::Hard);
        assert_eq!(player.name, "Ayla");
        assert_eq!(player.hp, 75);
        assert_eq!(player.max_hp, 75);
        assert_eq!(player.position, 0);
        assert_eq!(player.passive_count, 1);
        assert!(player.can_cast());
        assert!(player.is_alive());
    }

    #[test]
    fn begin_turn_floors_cooldown_at_zero() {
        let mut player = Player::new("Kip", PlayerClass::Mage, Difficulty::Medium);
        player.spell_cooldown = 1;
        player.begin_turn();
        assert_eq!(player.spell_cooldown, 0);
        player.begin_turn();
        assert_eq!(player.spell_cooldown, 0);
    }

    #[test]
    fn priest_is_not_a_class() {
        assert!("priest".parse::<PlayerClass>().is_err());
        assert_eq!("Healer".parse::<PlayerClass>().unwrap(), PlayerClass::Healer);
    }
}
