//! Error types

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type for the engine, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level diagnostics, context)
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a malformed-decimal error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DecimalParse, msg)
    }

    /// Create a division-by-zero error
    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DivisionByZero, msg)
    }

    /// Create an out-of-range error naming the offending field and value
    pub fn out_of_range(field: impl Into<String>, value: impl ToString) -> Self {
        let field = field.into();
        Self::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{} is out of the accepted monetary range", field),
        )
        .with_detail("field", field)
        .with_detail("value", value.to_string())
    }

    /// Create an invalid quantity error
    pub fn invalid_quantity(field: impl Into<String>, value: impl ToString) -> Self {
        Self::new(ErrorCode::InvalidQuantity)
            .with_detail("field", field.into())
            .with_detail("value", value.to_string())
    }

    /// Create an invalid percentage error
    pub fn invalid_percentage(field: impl Into<String>, value: impl ToString) -> Self {
        Self::new(ErrorCode::InvalidPercentage)
            .with_detail("field", field.into())
            .with_detail("value", value.to_string())
    }

    /// Create a no-open-shift error
    pub fn shift_not_open() -> Self {
        Self::new(ErrorCode::ShiftNotOpen)
    }

    /// Create an already-closed-shift error
    pub fn shift_already_closed() -> Self {
        Self::new(ErrorCode::ShiftAlreadyClosed)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}
