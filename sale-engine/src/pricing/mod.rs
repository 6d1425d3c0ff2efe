//! Invoice figure derivation
//!
//! Pure functions composing the money primitives: line totals, invoice
//! aggregates, change, global discounts, margins and payment splits.
//! No side effects, no I/O.

mod calculator;

pub use calculator::*;

#[cfg(test)]
mod tests;
