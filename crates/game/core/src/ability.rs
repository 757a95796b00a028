//! Class spells and passive skips.
//!
//! Dispatch is an exhaustive match on [`PlayerClass`]; adding a class fails
//! to compile until every ability handles it.

use crate::config::GameConfig;
use crate::error::AbilityError;
use crate::events::TurnEvent;
use crate::player::{Player, PlayerClass};

/// Cast the player's class spell and start its cooldown.
///
/// # Errors
///
/// [`AbilityError::OnCooldown`] if the spell is still recharging; the player
/// is not modified.
pub fn cast_spell(player: &mut Player) -> Result<TurnEvent, AbilityError> {
    if !player.can_cast() {
        return Err(AbilityError::OnCooldown {
            remaining: player.spell_cooldown,
        });
    }

    match player.class {
        PlayerClass::Warrior => player.spell_active = true,
        PlayerClass::Mage => player.immunity_turns = GameConfig::IMMUNITY_CHARGES,
        PlayerClass::Tank => player.shield += GameConfig::SHIELD_GAIN,
        PlayerClass::Healer => {
            player.hp = (player.hp + GameConfig::HEAL_AMOUNT).min(player.max_hp);
        }
    }
    player.spell_cooldown = GameConfig::SPELL_COOLDOWN;

    Ok(TurnEvent::SpellCast {
        player: player.name.clone(),
        class: player.class,
    })
}

/// Whether a landing at `position` lets the player choose to spend a passive.
///
/// Passives are unavailable once the player is within
/// [`GameConfig::PASSIVE_CUTOFF`] tiles of the end of the board.
pub fn offer_passive(player: &Player, position: usize, board_size: usize) -> bool {
    player.passive_count > 0 && position + GameConfig::PASSIVE_CUTOFF < board_size
}

/// Spend one passive use. The pending tile effect is discarded by the caller.
pub fn use_passive(player: &mut Player) -> TurnEvent {
    player.passive_count = player.passive_count.saturating_sub(1);
    TurnEvent::PassiveUsed {
        player: player.name.clone(),
        class: player.class,
    }
}
