//! Money calculation primitives using rust_decimal for precision
//!
//! Every monetary computation in the engine goes through `Decimal`;
//! conversion to `f64` happens only at the final response boundary via
//! [`to_f64`], never mid-computation. Rounding is half-up (midpoint away
//! from zero) because fiscal rounding must be deterministic, not banker's.

use rust_decimal::prelude::*;
use shared::AppError;

/// Default scale for monetary values (2 decimal places)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01, one minimal currency unit)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest magnitude the persistence column can hold:
/// 9_999_999_999_999.999999 (13 integer digits + 6 fractional digits)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, 6);

/// Rounding configuration threaded through every monetary computation
///
/// An explicit value instead of process-wide decimal state, so results
/// never depend on ambient configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyContext {
    /// Decimal places to round monetary results to
    pub scale: u32,
    /// Rounding strategy (half-up by default)
    pub strategy: RoundingStrategy,
}

impl Default for MoneyContext {
    fn default() -> Self {
        Self {
            scale: DECIMAL_PLACES,
            strategy: RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// Parse a decimal string
///
/// Malformed input fails with `DecimalParse`; it is never silently
/// defaulted to zero.
pub fn parse_decimal(value: &str) -> Result<Decimal, AppError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| AppError::parse(format!("cannot parse '{}' as decimal: {}", value, e)))
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated at the boundary. If NaN/Infinity
/// somehow reaches here, logs an error and returns ZERO to avoid silent
/// data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Strict f64 conversion; non-finite or unrepresentable input fails
pub fn try_decimal(value: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64(value)
        .ok_or_else(|| AppError::parse(format!("{} is not a representable decimal", value)))
}

/// Convert Decimal back to f64 for the response boundary, rounded per context
#[inline]
pub fn to_f64(value: Decimal, ctx: &MoneyContext) -> f64 {
    round_money(value, ctx)
        .to_f64()
        // Values pass the MAX_AMOUNT guard before reaching here, so the
        // rounded magnitude is always representable as f64
        .expect("Decimal within the monetary range is always representable as f64")
}

/// Round a monetary value per context (half-up at 2dp by default)
#[inline]
pub fn round_money(value: Decimal, ctx: &MoneyContext) -> Decimal {
    value.round_dp_with_strategy(ctx.scale, ctx.strategy)
}

/// amount × pct / 100
#[inline]
pub fn percentage(amount: Decimal, pct: Decimal) -> Decimal {
    amount * pct / Decimal::ONE_HUNDRED
}

/// Exact division; division by zero surfaces as a typed error
pub fn checked_div(a: Decimal, b: Decimal) -> Result<Decimal, AppError> {
    if b.is_zero() {
        return Err(AppError::division_by_zero(format!(
            "cannot divide {} by zero",
            a
        )));
    }
    a.checked_div(b)
        .ok_or_else(|| AppError::internal(format!("decimal overflow dividing {} by {}", a, b)))
}

/// Whether a value fits the persistence column bound
#[inline]
pub fn is_valid_amount(value: Decimal) -> bool {
    value.abs() <= MAX_AMOUNT
}

/// Range-guard a monetary field before any arithmetic touches it
pub fn require_valid_amount(value: Decimal, field: &str) -> Result<(), AppError> {
    if !is_valid_amount(value) {
        return Err(AppError::out_of_range(field, value));
    }
    Ok(())
}

/// Compare two monetary values for equality (within 0.01 tolerance)
#[inline]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
