//! Narration events produced by every engine operation.
//!
//! Events are data; [`Display`](core::fmt::Display) renders the line a
//! presentation layer prints.

use core::fmt;

use crate::board::TileCategory;
use crate::config::GameConfig;
use crate::player::PlayerClass;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TurnEvent {
    AdventureBegins,
    TurnSkipped {
        player: String,
    },
    SpellCast {
        player: String,
        class: PlayerClass,
    },
    ChargeTriggered {
        player: String,
        bonus: u32,
    },
    Rolled {
        player: String,
        roll: u32,
    },
    Moved {
        player: String,
        from: usize,
        to: usize,
    },
    TileTriggered {
        player: String,
        category: TileCategory,
        text: &'static str,
    },
    ImmunityBlocked {
        player: String,
    },
    PassiveUsed {
        player: String,
        class: PlayerClass,
    },
    EffectNegated {
        player: String,
    },
    Healed {
        player: String,
        amount: i32,
    },
    ShieldAbsorbed {
        player: String,
        amount: i32,
    },
    Damaged {
        player: String,
        amount: i32,
    },
    PushedForward {
        player: String,
        spaces: i32,
    },
    PushedBack {
        player: String,
        spaces: i32,
    },
    WillSkipNextTurn {
        player: String,
    },
    Fallen {
        player: String,
    },
    FinalChallengeReached {
        player: String,
        target: u32,
    },
    FinalChallengeRolled {
        player: String,
        roll: u32,
    },
    FinalChallengeFailed {
        player: String,
        penalty: i32,
    },
    FellAtFinal {
        player: String,
    },
    SentBackToRetry {
        player: String,
        position: usize,
    },
    Victory {
        player: String,
        hp: i32,
    },
    AllFallen,
}

impl TurnEvent {
    /// Name of the player this event concerns, if any.
    pub fn player(&self) -> Option<&str> {
        match self {
            TurnEvent::AdventureBegins | TurnEvent::AllFallen => None,
            TurnEvent::TurnSkipped { player }
            | TurnEvent::SpellCast { player, .. }
            | TurnEvent::ChargeTriggered { player, .. }
            | TurnEvent::Rolled { player, .. }
            | TurnEvent::Moved { player, .. }
            | TurnEvent::TileTriggered { player, .. }
            | TurnEvent::ImmunityBlocked { player }
            | TurnEvent::PassiveUsed { player, .. }
            | TurnEvent::EffectNegated { player }
            | TurnEvent::Healed { player, .. }
            | TurnEvent::ShieldAbsorbed { player, .. }
            | TurnEvent::Damaged { player, .. }
            | TurnEvent::PushedForward { player, .. }
            | TurnEvent::PushedBack { player, .. }
            | TurnEvent::WillSkipNextTurn { player }
            | TurnEvent::Fallen { player }
            | TurnEvent::FinalChallengeReached { player, .. }
            | TurnEvent::FinalChallengeRolled { player, .. }
            | TurnEvent::FinalChallengeFailed { player, .. }
            | TurnEvent::FellAtFinal { player }
            | TurnEvent::SentBackToRetry { player, .. }
            | TurnEvent::Victory { player, .. } => Some(player),
        }
    }
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::AdventureBegins => write!(f, "The adventure begins!"),
            TurnEvent::TurnSkipped { player } => write!(f, "{player} skips their turn!"),
            TurnEvent::SpellCast { player, class } => match class {
                PlayerClass::Warrior => write!(
                    f,
                    "{player} activates Charge! Next roll gets +{} movement!",
                    GameConfig::CHARGE_BONUS
                ),
                PlayerClass::Mage => write!(
                    f,
                    "{player} casts Immunity! Next {} tiles have no effect!",
                    GameConfig::IMMUNITY_CHARGES
                ),
                PlayerClass::Tank => write!(
                    f,
                    "{player} raises Shield! Gained {} shield points!",
                    GameConfig::SHIELD_GAIN
                ),
                PlayerClass::Healer => write!(
                    f,
                    "{player} casts Heal! Restored up to {} HP!",
                    GameConfig::HEAL_AMOUNT
                ),
            },
            TurnEvent::ChargeTriggered { player, bonus } => {
                write!(f, "{player}'s Charge activates! +{bonus} extra movement!")
            }
            TurnEvent::Rolled { player, roll } => write!(f, "{player} rolled a {roll}!"),
            TurnEvent::Moved { player, from, to } => {
                write!(f, "{player} moves from {from} to {to}")
            }
            TurnEvent::TileTriggered { category, text, .. } => {
                write!(f, "{}: {text}", category.title())
            }
            TurnEvent::ImmunityBlocked { player } => write!(
                f,
                "{player}'s Immunity protects them from the tile effect!"
            ),
            TurnEvent::PassiveUsed { player, class } => match class {
                PlayerClass::Warrior => {
                    write!(f, "{player} used Strike and slashed through the challenge!")
                }
                PlayerClass::Mage => {
                    write!(f, "{player} used Fireball and burned the challenge away!")
                }
                PlayerClass::Tank => {
                    write!(f, "{player} raised their Shield to block the challenge!")
                }
                PlayerClass::Healer => write!(
                    f,
                    "{player} used Speed Enchantment and darted past the challenge!"
                ),
            },
            TurnEvent::EffectNegated { player } => {
                write!(f, "{player} is immune to the tile effect!")
            }
            TurnEvent::Healed { player, amount } => write!(f, "{player} gains {amount} HP!"),
            TurnEvent::ShieldAbsorbed { player, amount } => {
                write!(f, "{player}'s shield absorbs {amount} damage!")
            }
            TurnEvent::Damaged { player, amount } => write!(f, "{player} loses {amount} HP!"),
            TurnEvent::PushedForward { player, spaces } => {
                write!(f, "{player} moves forward {spaces} spaces!")
            }
            TurnEvent::PushedBack { player, spaces } => {
                write!(f, "{player} moves back {spaces} spaces!")
            }
            TurnEvent::WillSkipNextTurn { player } => {
                write!(f, "{player} will skip their next turn!")
            }
            TurnEvent::Fallen { player } => {
                write!(f, "{player} has fallen! They are out of the game.")
            }
            TurnEvent::FinalChallengeReached { player, target } => write!(
                f,
                "{player} reaches the final challenge and must roll {target} or higher to claim victory!"
            ),
            TurnEvent::FinalChallengeRolled { player, roll } => {
                write!(f, "{player} rolls {roll} for the final challenge!")
            }
            TurnEvent::FinalChallengeFailed { player, penalty } => write!(
                f,
                "{player} fails the final challenge and loses {penalty} HP!"
            ),
            TurnEvent::FellAtFinal { player } => {
                write!(f, "{player} falls at the final challenge!")
            }
            TurnEvent::SentBackToRetry { player, position } => {
                write!(f, "{player} is pushed back to tile {position} to try again!")
            }
            TurnEvent::Victory { player, hp } => write!(
                f,
                "{player} has conquered the Mystic Dice Adventure! With {hp} HP remaining, they claim the crown of the realm!"
            ),
            TurnEvent::AllFallen => write!(
                f,
                "All adventurers have fallen. The mystic realm claims another group of heroes..."
            ),
        }
    }
}
