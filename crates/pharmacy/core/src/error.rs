//! Common error infrastructure for pharmacy-core.
//!
//! This module provides shared types and traits used across all error types in
//! pharmacy-core. Domain-specific errors (`FormulaError`, `RulesError`,
//! `CostError`) are defined in their respective modules alongside the operations
//! they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each domain has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for handling strategies
//! - **Stable Codes**: Every variant maps to a static code used in logs and tests

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Programming error in a caller (e.g. an out-of-range draw)
/// - **Fatal**: Data required for the computation is unusable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - the request does not match the loaded data.
    ///
    /// Examples: unknown item, skill level missing from the rules, prices too
    /// large to sum
    Validation,

    /// Internal error - a contract between caller and engine was broken.
    ///
    /// Example: random draw outside its fixed range
    Internal,

    /// Fatal error - the rules document cannot be used at all.
    ///
    /// Examples: missing section, negative difficulty
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all pharmacy-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on the cause, not the impact
pub trait PharmacyError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is what per-row failures are logged with, so it must be stable.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
