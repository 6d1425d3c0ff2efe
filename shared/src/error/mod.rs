//! Unified error handling
//!
//! Structured error codes and the [`AppError`] type used across the
//! workspace. Codes are numeric for stable serialization toward the
//! request layer; messages are developer-facing defaults.

pub mod codes;
pub mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;

/// Convenient Result alias
pub type AppResult<T> = Result<T, AppError>;
