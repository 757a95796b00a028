//! Static effect tables per tile category.
//!
//! The tables are immutable templates. Every [`draw`] builds a fresh
//! [`EffectDescriptor`]; scaling produces another copy, so a draw can never
//! alter what later draws see.

use crate::board::TileCategory;
use crate::config::{Difficulty, GameConfig};
use crate::rng::RandomSource;

/// State changes a tile event requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    /// Positive heals, negative damages.
    pub hp_delta: Option<i32>,
    /// Positive moves forward, negative moves back.
    pub move_delta: Option<i32>,
    /// Forfeit the player's next action.
    pub skip_turn: bool,
}

impl Effect {
    pub const fn hp(delta: i32) -> Self {
        Self {
            hp_delta: Some(delta),
            move_delta: None,
            skip_turn: false,
        }
    }

    pub const fn movement(delta: i32) -> Self {
        Self {
            hp_delta: None,
            move_delta: Some(delta),
            skip_turn: false,
        }
    }

    pub const fn skip() -> Self {
        Self {
            hp_delta: None,
            move_delta: None,
            skip_turn: true,
        }
    }

    /// Scale HP by the difficulty intensity, rounding toward negative
    /// infinity and saturating at the `i32` bounds. Movement is never scaled.
    pub fn scaled(self, intensity_percent: i32) -> Self {
        Self {
            hp_delta: self.hp_delta.map(|hp| {
                let scaled = (i64::from(hp) * i64::from(intensity_percent)).div_euclid(100);
                scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }),
            ..self
        }
    }
}

/// A drawn tile event: narration plus the effect payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectDescriptor {
    pub text: &'static str,
    pub effect: Effect,
}

/// Movement part of a catalog template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveTemplate {
    None,
    Fixed(i32),
    /// Rolled on every draw.
    Die,
}

#[derive(Clone, Copy, Debug)]
struct EffectTemplate {
    text: &'static str,
    hp: Option<i32>,
    movement: MoveTemplate,
    skip_turn: bool,
}

impl EffectTemplate {
    const fn hp(text: &'static str, hp: i32) -> Self {
        Self {
            text,
            hp: Some(hp),
            movement: MoveTemplate::None,
            skip_turn: false,
        }
    }

    const fn movement(text: &'static str, movement: MoveTemplate) -> Self {
        Self {
            text,
            hp: None,
            movement,
            skip_turn: false,
        }
    }

    fn instantiate(&self, rng: &mut dyn RandomSource) -> EffectDescriptor {
        let move_delta = match self.movement {
            MoveTemplate::None => None,
            MoveTemplate::Fixed(delta) => Some(delta),
            MoveTemplate::Die => Some(rng.roll_die(GameConfig::DIE_SIDES) as i32),
        };
        EffectDescriptor {
            text: self.text,
            effect: Effect {
                hp_delta: self.hp,
                move_delta,
                skip_turn: self.skip_turn,
            },
        }
    }
}

const COMEDY: &[EffectTemplate] = &[
    EffectTemplate::movement(
        "A playful goblin tickles you. You laugh so hard you trip forward!",
        MoveTemplate::Fixed(2),
    ),
    EffectTemplate::hp("You find a hidden stash of snacks. You feel refreshed!", 5),
    EffectTemplate {
        text: "A traveling bard tells a hilarious joke. You're too busy laughing to move!",
        hp: None,
        movement: MoveTemplate::None,
        skip_turn: true,
    },
];

const DANGER: &[EffectTemplate] = &[
    EffectTemplate::hp("You step on a rusty spike trap!", -10),
    EffectTemplate::hp("A pack of wolves attacks!", -15),
    EffectTemplate::hp("A rockslide hits you!", -20),
];

const MYSTERY: &[EffectTemplate] = &[
    EffectTemplate::hp(
        "A mysterious hermit gives you a potion. It restores your health!",
        15,
    ),
    EffectTemplate::movement(
        "A portal opens and zaps you to a different spot!",
        MoveTemplate::Die,
    ),
    EffectTemplate {
        text: "A strange energy flows through you. You lose some health but move faster!",
        hp: Some(-5),
        movement: MoveTemplate::Fixed(2),
        skip_turn: false,
    },
];

const HEALING: &[EffectTemplate] = &[
    EffectTemplate::hp("You rest by a shimmering spring. The water is magical!", 10),
    EffectTemplate::hp("You find a rare herb. It has healing properties.", 15),
];

const GO_BACK: &[EffectTemplate] = &[
    EffectTemplate::movement("A cursed wind blows you back!", MoveTemplate::Fixed(-5)),
    EffectTemplate::movement(
        "You fall into a pit and have to climb back out!",
        MoveTemplate::Fixed(-8),
    ),
];

fn table(category: TileCategory) -> &'static [EffectTemplate] {
    match category {
        TileCategory::Start | TileCategory::Final => &[],
        TileCategory::Danger => DANGER,
        TileCategory::Healing => HEALING,
        TileCategory::Mystery => MYSTERY,
        TileCategory::Comedy => COMEDY,
        TileCategory::GoBack => GO_BACK,
    }
}

/// Whether landing on `category` draws an event at all.
pub fn has_effects(category: TileCategory) -> bool {
    !table(category).is_empty()
}

/// Draw an unscaled event uniformly from the category's table.
///
/// Returns `None` for `start` and `final`, which have no table. No random
/// values are consumed in that case.
pub fn draw(category: TileCategory, rng: &mut dyn RandomSource) -> Option<EffectDescriptor> {
    let entries = table(category);
    if entries.is_empty() {
        return None;
    }
    let index = rng.pick(entries.len());
    entries.get(index).map(|template| template.instantiate(rng))
}

/// Scale a drawn event for the session difficulty.
pub fn scale(descriptor: EffectDescriptor, difficulty: Difficulty) -> EffectDescriptor {
    EffectDescriptor {
        effect: descriptor.effect.scaled(difficulty.intensity_percent()),
        ..descriptor
    }
}
