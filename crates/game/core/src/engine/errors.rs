//! Error types for engine operations.

use crate::error::{AbilityError, ErrorSeverity, GameError};

/// Operation requested from a [`TurnEngine`](super::TurnEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EngineAction {
    Roll,
    CastSpell,
    ChoosePassive,
}

/// Errors surfaced while driving a turn.
///
/// A rejected operation leaves the session untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: EngineAction,
        phase: &'static str,
    },

    #[error(transparent)]
    Ability(#[from] AbilityError),
}

impl TurnError {
    pub(crate) fn invalid(action: EngineAction, phase: &'static str) -> Self {
        Self::InvalidTransition { action, phase }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTransition { .. } => ErrorSeverity::Internal,
            Self::Ability(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "TURN_INVALID_TRANSITION",
            Self::Ability(err) => err.error_code(),
        }
    }
}
