//! Cash shift models
//!
//! A shift is a bounded work session during which an operator's drawer is
//! open and accountable. Exactly one open shift per operator at a time;
//! the persistence layer owns that uniqueness guarantee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shift status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShiftStatus {
    #[serde(rename = "OPEN")]
    #[default]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
}

/// Manual cash movement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashMovementKind {
    /// Cash put into the drawer outside a sale
    Income,
    /// Cash taken out of the drawer (supplier payout, bank drop, ...)
    Expense,
}

/// Manual cash movement recorded against an open shift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashMovement {
    pub kind: CashMovementKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Unix millis, set by the caller when the movement is recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<i64>,
}

/// Live summary of a cash shift
///
/// Invariant: expected_cash = opening_amount + sales_cash + manual_income
/// - manual_expense. Recomputed on every read while the shift is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub opening_amount: Decimal,
    /// Cash-method payments accumulated during the shift
    #[serde(with = "rust_decimal::serde::float")]
    pub sales_cash: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub manual_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub manual_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_cash: Decimal,
}

/// Close-shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftClose {
    /// Actual cash counted in the drawer
    #[serde(with = "rust_decimal::serde::float")]
    pub actual_cash: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Reconciliation figures produced when a shift is closed
///
/// difference = actual - expected; positive is overage, negative is
/// shortage. Never clamped: a shortage is a required signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftReconciliation {
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_cash: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub actual_cash: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub difference: Decimal,
}
