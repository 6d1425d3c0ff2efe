//! Sale engine
//!
//! The monetary calculation and trust-boundary reconciliation core of the
//! point of sale. Every money-bearing figure is computed on
//! `rust_decimal::Decimal`; native floats exist only at the serialization
//! boundary.
//!
//! The engine is computationally pure: no I/O, no shared mutable state,
//! every function operates on its own inputs. The persistence-side
//! guarantees it relies on (one open shift per operator, transactional
//! invoice creation) are the caller's obligation.

pub mod invoice;
pub mod money;
pub mod pricing;
pub mod shifts;

// Re-exports: the engine's external surface
pub use invoice::{TolerancePolicy, validate_invoice};
pub use money::MoneyContext;
pub use shifts::{CashShift, compute_shift_summary, validate_shift_close};
