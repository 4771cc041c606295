//! Rules construction and lookup errors.

use crate::error::{ErrorSeverity, PharmacyError};

/// Errors raised while building or querying [`Rules`](super::Rules).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RulesError {
    /// The source document is unusable: not a mapping, a required section is
    /// missing or empty, a level key is out of range, or a value is negative.
    #[error("invalid rules: {0}")]
    InvalidRules(String),

    /// Requested skill level has no base difficulty.
    #[error("invalid pharmacy level {0}, expected a level present in 0..=10")]
    LevelOutOfRange(i32),

    /// Requested item has no per-item difficulty.
    #[error("item id {0} not found in rules")]
    UnknownItem(u32),
}

impl RulesError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRules(message.into())
    }
}

impl PharmacyError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RulesError::InvalidRules(_) => ErrorSeverity::Fatal,
            RulesError::LevelOutOfRange(_) | RulesError::UnknownItem(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RulesError::InvalidRules(_) => "RULES_INVALID",
            RulesError::LevelOutOfRange(_) => "RULES_LEVEL_OUT_OF_RANGE",
            RulesError::UnknownItem(_) => "RULES_UNKNOWN_ITEM",
        }
    }
}
