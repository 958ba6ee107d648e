//! # Error Types
//!
//! Domain-specific error types for shwe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shwe-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule refusals (e.g. empty sale)       │
//! │  └── ValidationError  - Opt-in strict input validation failures        │
//! │                                                                         │
//! │  shwe-cli errors (app)                                                 │
//! │  ├── ConfigError      - Invalid environment configuration              │
//! │  └── ApiError         - What the caller sees (serialized JSON)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why So Few Errors?
//! The conversion engine is total over its input domain: malformed numbers
//! become zero, negatives clamp, and divisions by zero yield degenerate
//! results. Errors only come out of the strict validators a caller opts into,
//! and out of the history recorder which refuses to record an empty sale.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sale with a non-positive total cannot be recorded in history.
    ///
    /// ## When This Occurs
    /// - The caller tries to save a breakdown before a weight or price
    ///   was entered
    /// - Negative fees cancelled out the gold value
    #[error("Nothing to record: sale total is {total}")]
    NothingToRecord { total: f64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced by the strict validators in [`crate::validation`] and by the
/// `FromStr` implementations of selector enums. The lenient conversion paths
/// never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field is not a finite number.
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Two mutually exclusive inputs were both supplied.
    #[error("{first} and {second} cannot both be given")]
    Conflicting { first: String, second: String },

    /// Unknown gram standard name.
    #[error("unknown gram standard '{0}' (expected 'old' or 'new')")]
    UnknownStandard(String),

    /// Unknown gem price unit.
    #[error("unknown gem price unit '{0}' (expected 'carat' or 'ratti')")]
    UnknownPriceUnit(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NothingToRecord { total: 0.0 };
        assert_eq!(err.to_string(), "Nothing to record: sale total is 0");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "stone fee".to_string(),
        };
        assert_eq!(err.to_string(), "stone fee must not be negative");

        let err = ValidationError::Conflicting {
            first: "pae".to_string(),
            second: "density".to_string(),
        };
        assert_eq!(err.to_string(), "pae and density cannot both be given");

        let err = ValidationError::UnknownStandard("middle".to_string());
        assert_eq!(
            err.to_string(),
            "unknown gram standard 'middle' (expected 'old' or 'new')"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
