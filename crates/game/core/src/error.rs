//! Common error infrastructure for mystic-core.
//!
//! Domain-specific errors ([`ValidationError`], [`AbilityError`],
//! [`TurnError`](crate::engine::TurnError)) are defined next to the operations
//! that produce them. They share the [`GameError`] classification so a
//! presentation layer can decide whether to re-prompt, show a denial, or
//! report an integration bug.
//!
//! Every operation validates before it mutates: a returned error means the
//! session is exactly as it was before the call.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Can retry later or choose another action (spell on cooldown).
    Recoverable,

    /// Invalid input; ask the user again (bad player setup).
    Validation,

    /// The caller drove the engine out of order. Indicates a bug in the
    /// presentation layer, not in user input.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all mystic-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, suitable for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Rejected game setup. Nothing is created when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("at least {required} named players are required (got {found})")]
    InsufficientPlayers { found: usize, required: usize },

    #[error("board must have at least {required} tiles (got {size})")]
    BoardTooSmall { size: usize, required: usize },

    #[error("tile {index} must be {expected}")]
    InvalidBoardLayout {
        index: usize,
        expected: &'static str,
    },
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPlayers { .. } => "VALIDATION_INSUFFICIENT_PLAYERS",
            Self::BoardTooSmall { .. } => "VALIDATION_BOARD_TOO_SMALL",
            Self::InvalidBoardLayout { .. } => "VALIDATION_INVALID_BOARD_LAYOUT",
        }
    }
}

/// Rejected spell cast. The player is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    #[error("spell is on cooldown for {remaining} more turn(s)")]
    OnCooldown { remaining: u32 },
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OnCooldown { .. } => "ABILITY_ON_COOLDOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_classify_recovery() {
        let cooldown = AbilityError::OnCooldown { remaining: 3 };
        assert!(cooldown.severity().is_recoverable());
        assert_eq!(cooldown.error_code(), "ABILITY_ON_COOLDOWN");

        let setup = ValidationError::InsufficientPlayers {
            found: 1,
            required: 2,
        };
        assert_eq!(setup.severity(), ErrorSeverity::Validation);
        assert!(!setup.severity().is_internal());
        assert_eq!(
            setup.to_string(),
            "at least 2 named players are required (got 1)"
        );
    }
}
