//! Calculation service

use rust_decimal::Decimal;
use shared::AppError;
use shared::models::{InvoiceTotals, LineItemInput, LineTotals, PaymentMethod};

use crate::money::{MoneyContext, checked_div, percentage, round_money};

/// Derive the figures for a single line
///
/// Discount is applied before tax: tax is computed on the discounted
/// base. This ordering is load-bearing for tax-law correctness and must
/// not be reversed.
pub fn calculate_line_item(item: &LineItemInput, ctx: &MoneyContext) -> LineTotals {
    let subtotal = round_money(item.unit_price * item.quantity, ctx);

    let discount = item
        .discount_percent
        .map(|d| round_money(percentage(subtotal, d), ctx))
        .unwrap_or(Decimal::ZERO);

    let taxable = subtotal - discount;

    let tax = item
        .tax_rate
        .map(|t| round_money(percentage(taxable, t), ctx))
        .unwrap_or(Decimal::ZERO);

    LineTotals {
        subtotal,
        discount,
        tax,
        total: taxable + tax,
    }
}

/// Fold line figures into invoice aggregates
///
/// Each of the four fields is summed independently across lines, never
/// recomputed from the aggregate subtotal, so the result does not depend
/// on rounding order or item order.
pub fn calculate_invoice_totals(items: &[LineItemInput], ctx: &MoneyContext) -> InvoiceTotals {
    let mut totals = InvoiceTotals::default();

    for item in items {
        let line = calculate_line_item(item, ctx);
        totals.subtotal += line.subtotal;
        totals.discount += line.discount;
        totals.tax += line.tax;
        totals.total += line.total;
    }

    totals
}

/// Change due for a cash payment, clamped at zero
///
/// A negative result would mean insufficient payment, which is a distinct
/// error condition owned by the validator, not by this function.
pub fn calculate_change(cash_received: Decimal, total: Decimal, ctx: &MoneyContext) -> Decimal {
    round_money((cash_received - total).max(Decimal::ZERO), ctx)
}

/// Order-level discount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalDiscount {
    /// Percentage of the amount (0-100)
    Percentage(Decimal),
    /// Flat amount subtracted as-is
    Fixed(Decimal),
}

/// Apply an order-level discount to an amount
///
/// Fixed discounts larger than the amount produce a negative result;
/// clamping is the caller's decision.
pub fn apply_global_discount(
    amount: Decimal,
    discount: &GlobalDiscount,
    ctx: &MoneyContext,
) -> Decimal {
    match discount {
        GlobalDiscount::Percentage(pct) => {
            round_money(amount * (Decimal::ONE - *pct / Decimal::ONE_HUNDRED), ctx)
        }
        GlobalDiscount::Fixed(value) => round_money(amount - *value, ctx),
    }
}

/// Selling price from cost and margin percentage
pub fn calculate_selling_price(cost: Decimal, margin_pct: Decimal, ctx: &MoneyContext) -> Decimal {
    round_money(cost * (Decimal::ONE + margin_pct / Decimal::ONE_HUNDRED), ctx)
}

/// Profit margin percentage: (selling_price - cost) / cost × 100
///
/// Undefined for zero cost; free/promotional items must be special-cased
/// by the caller rather than reported as infinite or silently-zero margin.
pub fn calculate_profit_margin(
    cost: Decimal,
    selling_price: Decimal,
    ctx: &MoneyContext,
) -> Result<Decimal, AppError> {
    let ratio = checked_div(selling_price - cost, cost)?;
    Ok(round_money(ratio * Decimal::ONE_HUNDRED, ctx))
}

/// Requested share of a payment split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSpec {
    pub method: PaymentMethod,
    /// Share of the total (0-100); shares are expected to sum to 100
    pub percentage: Decimal,
}

/// Allocated share of a payment split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSplit {
    pub method: PaymentMethod,
    pub amount: Decimal,
}

/// Allocate a total proportionally across payment methods
///
/// Each share is rounded per context; the rounding remainder is assigned
/// to the first split, so the allocated amounts always sum exactly to the
/// rounded total.
pub fn split_payment(total: Decimal, splits: &[SplitSpec], ctx: &MoneyContext) -> Vec<PaymentSplit> {
    if splits.is_empty() {
        return Vec::new();
    }

    let total = round_money(total, ctx);
    let mut allocated: Vec<PaymentSplit> = splits
        .iter()
        .map(|s| PaymentSplit {
            method: s.method,
            amount: round_money(percentage(total, s.percentage), ctx),
        })
        .collect();

    let sum: Decimal = allocated.iter().map(|s| s.amount).sum();
    let remainder = total - sum;
    if !remainder.is_zero() {
        allocated[0].amount += remainder;
    }

    allocated
}
