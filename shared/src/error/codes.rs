//! Unified error codes for the sale engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Decimal/math errors
//! - 4xxx: Invoice errors
//! - 5xxx: Payment errors
//! - 7xxx: Shift errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility with the request layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Decimal / Math ====================
    /// Malformed decimal input
    DecimalParse = 1001,
    /// Division by zero
    DivisionByZero = 1002,

    // ==================== 4xxx: Invoice ====================
    /// Invoice has no line items
    InvoiceEmpty = 4001,
    /// Invoice has no payments
    PaymentsEmpty = 4002,
    /// Client and server totals disagree beyond tolerance
    TotalsMismatch = 4003,
    /// Payments do not reconcile with the invoice total
    PaymentMismatch = 4004,
    /// Line item quantity is invalid
    InvalidQuantity = 4005,
    /// Discount or tax percentage out of [0, 100]
    InvalidPercentage = 4006,

    // ==================== 5xxx: Payment ====================
    /// Payment amount is invalid
    PaymentInvalidAmount = 5001,
    /// Invalid payment method
    PaymentInvalidMethod = 5002,

    // ==================== 7xxx: Shift ====================
    /// No open cash-drawer shift for the operator
    ShiftNotOpen = 7001,
    /// Shift not found
    ShiftNotFound = 7002,
    /// Shift has already been closed
    ShiftAlreadyClosed = 7003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Decimal / Math
            ErrorCode::DecimalParse => "Malformed decimal value",
            ErrorCode::DivisionByZero => "Division by zero",

            // Invoice
            ErrorCode::InvoiceEmpty => "Invoice has no line items",
            ErrorCode::PaymentsEmpty => "Invoice has no payments",
            ErrorCode::TotalsMismatch => {
                "Invoice totals could not be verified, please reload and retry"
            }
            ErrorCode::PaymentMismatch => "Payments do not match the invoice total",
            ErrorCode::InvalidQuantity => "Quantity must be positive",
            ErrorCode::InvalidPercentage => "Percentage must be between 0 and 100",

            // Payment
            ErrorCode::PaymentInvalidAmount => "Payment amount is invalid",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",

            // Shift
            ErrorCode::ShiftNotOpen => "No open cash-drawer shift",
            ErrorCode::ShiftNotFound => "Shift not found",
            ErrorCode::ShiftAlreadyClosed => "Shift has already been closed",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Decimal / Math
            1001 => Ok(ErrorCode::DecimalParse),
            1002 => Ok(ErrorCode::DivisionByZero),

            // Invoice
            4001 => Ok(ErrorCode::InvoiceEmpty),
            4002 => Ok(ErrorCode::PaymentsEmpty),
            4003 => Ok(ErrorCode::TotalsMismatch),
            4004 => Ok(ErrorCode::PaymentMismatch),
            4005 => Ok(ErrorCode::InvalidQuantity),
            4006 => Ok(ErrorCode::InvalidPercentage),

            // Payment
            5001 => Ok(ErrorCode::PaymentInvalidAmount),
            5002 => Ok(ErrorCode::PaymentInvalidMethod),

            // Shift
            7001 => Ok(ErrorCode::ShiftNotOpen),
            7002 => Ok(ErrorCode::ShiftNotFound),
            7003 => Ok(ErrorCode::ShiftAlreadyClosed),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
