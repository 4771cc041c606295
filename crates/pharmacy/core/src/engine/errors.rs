//! Error types for the formula evaluator.

use crate::config::PharmacyConfig;
use crate::error::{ErrorSeverity, PharmacyError};

/// Identifies which of the two random draws was out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Draw {
    /// The `Rand[30..150]` term.
    R1,
    /// The `Rand[4..10]` term, multiplied by the protection level.
    R2,
}

impl Draw {
    /// Inclusive range accepted for this draw.
    pub const fn range(&self) -> (i32, i32) {
        match self {
            Draw::R1 => (PharmacyConfig::R1_MIN, PharmacyConfig::R1_MAX),
            Draw::R2 => (PharmacyConfig::R2_MIN, PharmacyConfig::R2_MAX),
        }
    }

    /// Returns true if `value` lies within this draw's range.
    pub const fn contains(&self, value: i32) -> bool {
        let (min, max) = self.range();
        value >= min && value <= max
    }
}

/// Errors raised by [`special_pharmacy`](super::special_pharmacy).
///
/// Draws are always produced internally from the fixed ranges, so any of these
/// indicates a caller bug; the value is rejected, never clamped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaError {
    #[error("{draw} must be in [{min}, {max}], got {value}")]
    InvalidArgument {
        draw: Draw,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl FormulaError {
    pub(crate) fn out_of_range(draw: Draw, value: i32) -> Self {
        let (min, max) = draw.range();
        Self::InvalidArgument {
            draw,
            value,
            min,
            max,
        }
    }
}

impl PharmacyError for FormulaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            FormulaError::InvalidArgument { draw: Draw::R1, .. } => "FORMULA_R1_OUT_OF_RANGE",
            FormulaError::InvalidArgument { draw: Draw::R2, .. } => "FORMULA_R2_OUT_OF_RANGE",
        }
    }
}
