//! Turn state machine.
//!
//! The [`TurnEngine`] is the only way to mutate a [`GameSession`] once the
//! game has started. Each entry point is one collaborator action and runs to
//! completion before returning:
//!
//! ```text
//! AwaitingRoll ──roll──► (skip? ─► Advancing)
//!                        roll die (+charge) ─► move
//!                        final tile? ─► FinalChallenge ─► Victory | Advancing
//!                        immune?     ─► Advancing
//!                        passive?    ─► AwaitingPassiveChoice ──choose──► Advancing
//!                        otherwise   ─► apply effect ─► Advancing
//! Advancing ─► AwaitingRoll (next living player) | GameOver (all fallen)
//! ```
//!
//! Every entry point checks the phase before touching state, so a rejected
//! call returns [`TurnError`] with the session unchanged.

mod errors;
mod turns;

pub use errors::{EngineAction, TurnError};

use crate::ability;
use crate::board::TileCategory;
use crate::catalog;
use crate::config::GameConfig;
use crate::events::TurnEvent;
use crate::resolve;
use crate::rng::RandomSource;
use crate::session::{GameOutcome, GameSession, PendingEvent, TurnPhase};

/// Overall game status after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress { current_player: usize },
    Victory { winner: usize },
    AllFallen,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Everything a collaborator needs to render the result of one action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnOutcome {
    /// Narration, in the order things happened.
    pub events: Vec<TurnEvent>,
    /// Index of the player who acted.
    pub player: usize,
    /// Movement die result (before any Charge bonus), if a roll happened.
    pub roll: Option<u32>,
    /// Position of the acting player after the action.
    pub position: usize,
    /// Category of the tile whose event was drawn, if any.
    pub tile_event: Option<TileCategory>,
    /// The acting player must now choose whether to spend a passive.
    pub passive_pending: bool,
    pub status: GameStatus,
}

/// Accumulates one action's narration and facts.
#[derive(Debug, Default)]
struct TurnLog {
    events: Vec<TurnEvent>,
    roll: Option<u32>,
    tile_event: Option<TileCategory>,
}

/// Drives a [`GameSession`] with an injected random source.
pub struct TurnEngine<'a> {
    session: &'a mut GameSession,
    rng: &'a mut dyn RandomSource,
}

impl<'a> TurnEngine<'a> {
    pub fn new(session: &'a mut GameSession, rng: &'a mut dyn RandomSource) -> Self {
        Self { session, rng }
    }

    pub fn session(&self) -> &GameSession {
        &*self.session
    }

    /// Roll for the current player and resolve where they land.
    ///
    /// A player flagged to skip loses this action instead: the flag is
    /// cleared and the turn passes without a roll.
    pub fn request_roll(&mut self) -> Result<TurnOutcome, TurnError> {
        self.expect_phase(EngineAction::Roll, TurnPhase::AwaitingRoll)?;

        let index = self.session.current;
        let mut log = TurnLog::default();

        if self.session.players[index].skip_turn {
            let player = &mut self.session.players[index];
            player.skip_turn = false;
            tracing::debug!(player = %player.name, "turn skipped");
            log.events.push(TurnEvent::TurnSkipped {
                player: player.name.clone(),
            });
            self.advance(&mut log.events);
            return Ok(self.finish(index, log));
        }

        let roll = self.rng.roll_die(GameConfig::DIE_SIDES);
        log.roll = Some(roll);

        let final_index = self.session.board.final_index();
        let player = &mut self.session.players[index];
        log.events.push(TurnEvent::Rolled {
            player: player.name.clone(),
            roll,
        });

        let mut spaces = roll as usize;
        if player.spell_active {
            player.spell_active = false;
            spaces += GameConfig::CHARGE_BONUS as usize;
            log.events.push(TurnEvent::ChargeTriggered {
                player: player.name.clone(),
                bonus: GameConfig::CHARGE_BONUS,
            });
        }

        let from = player.position;
        let to = (from + spaces).min(final_index);
        player.position = to;
        log.events.push(TurnEvent::Moved {
            player: player.name.clone(),
            from,
            to,
        });
        tracing::debug!(player = %player.name, roll, from, to, "player moved");

        if to == final_index {
            self.final_challenge(index, &mut log);
        } else {
            self.land(index, &mut log);
        }

        Ok(self.finish(index, log))
    }

    /// Cast the current player's class spell. Does not end the turn.
    ///
    /// # Errors
    ///
    /// - [`TurnError::Ability`] if the spell is on cooldown
    /// - [`TurnError::InvalidTransition`] outside [`TurnPhase::AwaitingRoll`]
    pub fn cast_spell(&mut self) -> Result<TurnOutcome, TurnError> {
        self.expect_phase(EngineAction::CastSpell, TurnPhase::AwaitingRoll)?;

        let index = self.session.current;
        let player = &mut self.session.players[index];
        let event = ability::cast_spell(player).inspect_err(|err| {
            tracing::warn!(player = %player.name, %err, "spell denied");
        })?;
        tracing::debug!(player = %player.name, class = %player.class, "spell cast");

        let log = TurnLog {
            events: vec![event],
            ..TurnLog::default()
        };
        Ok(self.finish(index, log))
    }

    /// Resolve a pending passive decision.
    ///
    /// `use_it == true` spends one passive and discards the tile effect
    /// entirely; `false` applies the deferred effect. Either way the turn
    /// then passes.
    pub fn choose_passive(&mut self, use_it: bool) -> Result<TurnOutcome, TurnError> {
        self.expect_phase(
            EngineAction::ChoosePassive,
            TurnPhase::AwaitingPassiveChoice,
        )?;
        let Some(pending) = self.session.pending_event else {
            return Err(self.reject(EngineAction::ChoosePassive));
        };

        let index = pending.player_index;
        let mut log = TurnLog {
            tile_event: Some(pending.tile_category),
            ..TurnLog::default()
        };

        self.session.pending_event = None;
        let player = &mut self.session.players[index];
        if use_it {
            log.events.push(ability::use_passive(player));
            log.events.push(TurnEvent::EffectNegated {
                player: player.name.clone(),
            });
            tracing::debug!(player = %player.name, remaining = player.passive_count, "passive used");
        } else {
            log.events
                .extend(resolve::apply_effect(player, &pending.effect, &self.session.board));
        }

        self.advance(&mut log.events);
        Ok(self.finish(index, log))
    }

    /// Resolve a landing on an ordinary tile.
    fn land(&mut self, index: usize, log: &mut TurnLog) {
        let position = self.session.players[index].position;
        let category = match self.session.board.category(position) {
            Some(category) if position > 0 && catalog::has_effects(category) => category,
            _ => {
                self.advance(&mut log.events);
                return;
            }
        };

        let player = &mut self.session.players[index];
        if player.immunity_turns > 0 {
            player.immunity_turns -= 1;
            tracing::debug!(
                player = %player.name,
                remaining = player.immunity_turns,
                "immunity consumed"
            );
            log.events.push(TurnEvent::ImmunityBlocked {
                player: player.name.clone(),
            });
            self.advance(&mut log.events);
            return;
        }

        let Some(drawn) = catalog::draw(category, &mut *self.rng) else {
            self.advance(&mut log.events);
            return;
        };
        let descriptor = catalog::scale(drawn, self.session.difficulty);
        log.tile_event = Some(category);

        let player = &mut self.session.players[index];
        log.events.push(TurnEvent::TileTriggered {
            player: player.name.clone(),
            category,
            text: descriptor.text,
        });
        tracing::debug!(
            player = %player.name,
            %category,
            effect = ?descriptor.effect,
            "tile event drawn"
        );

        if ability::offer_passive(player, position, self.session.board.len()) {
            self.session.pending_event = Some(PendingEvent {
                player_index: index,
                effect: descriptor.effect,
                tile_category: category,
            });
            self.session.phase = TurnPhase::AwaitingPassiveChoice;
            return;
        }

        log.events.extend(resolve::apply_effect(
            player,
            &descriptor.effect,
            &self.session.board,
        ));
        self.advance(&mut log.events);
    }

    /// Single die against the target; failure costs HP directly, ignoring
    /// any shield.
    fn final_challenge(&mut self, index: usize, log: &mut TurnLog) {
        let name = self.session.players[index].name.clone();
        log.events.push(TurnEvent::FinalChallengeReached {
            player: name.clone(),
            target: GameConfig::FINAL_CHALLENGE_TARGET,
        });

        let roll = self.rng.roll_die(GameConfig::DIE_SIDES);
        log.events.push(TurnEvent::FinalChallengeRolled {
            player: name.clone(),
            roll,
        });

        let retry_position = self.session.board.len().saturating_sub(2);
        let player = &mut self.session.players[index];

        if roll >= GameConfig::FINAL_CHALLENGE_TARGET {
            tracing::info!(player = %name, roll, hp = player.hp, "final challenge won");
            log.events.push(TurnEvent::Victory {
                player: name,
                hp: player.hp,
            });
            self.session.phase = TurnPhase::GameOver(GameOutcome::Victory { winner: index });
            return;
        }

        player.hp = (player.hp - GameConfig::FINAL_CHALLENGE_PENALTY).max(0);
        log.events.push(TurnEvent::FinalChallengeFailed {
            player: name.clone(),
            penalty: GameConfig::FINAL_CHALLENGE_PENALTY,
        });

        if player.is_alive() {
            player.position = retry_position;
            log.events.push(TurnEvent::SentBackToRetry {
                player: name,
                position: retry_position,
            });
        } else {
            tracing::info!(player = %name, "player eliminated at the final challenge");
            log.events.push(TurnEvent::FellAtFinal { player: name });
        }

        self.advance(&mut log.events);
    }

    fn expect_phase(&self, action: EngineAction, expected: TurnPhase) -> Result<(), TurnError> {
        if self.session.phase == expected {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    fn reject(&self, action: EngineAction) -> TurnError {
        let phase = self.session.phase.as_str();
        tracing::warn!(%action, phase, "rejected out-of-order engine call");
        TurnError::invalid(action, phase)
    }

    fn finish(&self, index: usize, log: TurnLog) -> TurnOutcome {
        let status = match self.session.phase {
            TurnPhase::GameOver(GameOutcome::Victory { winner }) => GameStatus::Victory { winner },
            TurnPhase::GameOver(GameOutcome::AllFallen) => GameStatus::AllFallen,
            TurnPhase::AwaitingRoll | TurnPhase::AwaitingPassiveChoice => {
                GameStatus::InProgress {
                    current_player: self.session.current,
                }
            }
        };

        TurnOutcome {
            events: log.events,
            player: index,
            roll: log.roll,
            position: self.session.players[index].position,
            tile_event: log.tile_event,
            passive_pending: self.session.phase == TurnPhase::AwaitingPassiveChoice,
            status,
        }
    }
}
