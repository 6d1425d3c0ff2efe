//! Data models
//!
//! Shared between the engine and the request layer. Monetary fields are
//! `rust_decimal::Decimal` end to end; they serialize as JSON numbers via
//! `rust_decimal::serde::float`, so floating point only exists on the wire.

pub mod invoice;
pub mod shift;

// Re-exports
pub use invoice::*;
pub use shift::*;
