//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in shwe                                   │
//! │                                                                         │
//! │  shwe sale --strict --price abc ...                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<Value, ApiError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ──── ValidationError::InvalidNumber ──┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Rule broken? ── CoreError::NothingToRecord ───── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: {"code": "VALIDATION_ERROR",                                   │
//! │           "message": "price is not a valid number: 'abc'"}              │
//! │  exit code 1                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shwe_core::{CoreError, ValidationError};

use crate::config::ConfigError;

/// Error printed when a command fails.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "weight must not be negative"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// A business rule refused the request
    BusinessLogic,

    /// Environment configuration is invalid
    ConfigError,

    /// Unexpected failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NothingToRecord { .. } => ApiError::new(ErrorCode::BusinessLogic, err.to_string()),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Failed to serialize result: {}", err);
        ApiError::internal("Failed to serialize result")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err = ApiError::from(ValidationError::MustBeNonNegative {
            field: "weight".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "weight must not be negative");
    }

    #[test]
    fn test_nothing_to_record_is_business_logic() {
        let err = ApiError::from(CoreError::NothingToRecord { total: 0.0 });
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_wrapped_validation_unwraps() {
        let core = CoreError::from(ValidationError::UnknownStandard("x".to_string()));
        assert_eq!(ApiError::from(core).code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::ConfigError, "bad");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"code": "CONFIG_ERROR", "message": "bad"}));
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
