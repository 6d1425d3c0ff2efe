//! Shared types for the sale engine
//!
//! Common types used across the workspace: data models for invoices,
//! payments and cash shifts, plus the unified error layer.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use serde::{Deserialize, Serialize};
