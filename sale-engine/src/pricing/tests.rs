use super::*;
use crate::money::MoneyContext;
use rust_decimal::Decimal;
use shared::ErrorCode;
use shared::models::{LineItemInput, PaymentMethod};

fn item(price: i64, qty: &str, discount: Option<i64>, tax: Option<i64>) -> LineItemInput {
    LineItemInput {
        product_id: None,
        name: "item".to_string(),
        unit_price: Decimal::from(price),
        quantity: qty.parse().unwrap(),
        discount_percent: discount.map(Decimal::from),
        tax_rate: tax.map(Decimal::from),
    }
}

#[test]
fn test_line_item_discount_before_tax() {
    // 2 × 50000, 10% discount, 19% tax: tax is 19% of the discounted
    // base (90000), not of the subtotal
    let ctx = MoneyContext::default();
    let line = calculate_line_item(&item(50_000, "2", Some(10), Some(19)), &ctx);

    assert_eq!(line.subtotal, Decimal::from(100_000));
    assert_eq!(line.discount, Decimal::from(10_000));
    assert_eq!(line.tax, Decimal::from(17_100));
    assert_eq!(line.total, Decimal::from(107_100));
}

#[test]
fn test_line_item_no_adjustments() {
    let ctx = MoneyContext::default();
    let line = calculate_line_item(&item(1_099, "3", None, None), &ctx);
    assert_eq!(line.subtotal, Decimal::from(3_297));
    assert_eq!(line.discount, Decimal::ZERO);
    assert_eq!(line.tax, Decimal::ZERO);
    assert_eq!(line.total, Decimal::from(3_297));
}

#[test]
fn test_line_item_fractional_quantity() {
    // Weight-based unit: 1.5 kg at 3.999/kg
    let ctx = MoneyContext::default();
    let mut weighted = item(0, "1.5", None, Some(21));
    weighted.unit_price = Decimal::new(3_999, 3);

    let line = calculate_line_item(&weighted, &ctx);
    assert_eq!(line.subtotal, Decimal::new(600, 2)); // 5.9985 → 6.00
    assert_eq!(line.tax, Decimal::new(126, 2)); // 21% of 6.00
    assert_eq!(line.total, Decimal::new(726, 2));
}

#[test]
fn test_invoice_totals_sum_fields_independently() {
    let ctx = MoneyContext::default();
    let items = vec![
        item(50_000, "2", Some(10), Some(19)),
        item(1_099, "3", None, None),
        item(200, "1", Some(50), Some(21)),
    ];

    let totals = calculate_invoice_totals(&items, &ctx);
    assert_eq!(totals.subtotal, Decimal::from(100_000 + 3_297 + 200));
    assert_eq!(totals.discount, Decimal::from(10_000 + 100));
    assert_eq!(totals.tax, Decimal::from(17_100 + 21));
    // total = subtotal - discount + tax, to full precision
    assert_eq!(
        totals.total,
        totals.subtotal - totals.discount + totals.tax
    );
}

#[test]
fn test_invoice_totals_order_independent() {
    let ctx = MoneyContext::default();
    let forward = vec![
        item(50_000, "2", Some(10), Some(19)),
        item(333, "3", Some(33), Some(21)),
        item(1, "999", None, Some(4)),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(
        calculate_invoice_totals(&forward, &ctx),
        calculate_invoice_totals(&reversed, &ctx)
    );
}

#[test]
fn test_change_clamped_at_zero() {
    let ctx = MoneyContext::default();
    let total = Decimal::from(100);

    assert_eq!(
        calculate_change(Decimal::from(150), total, &ctx),
        Decimal::from(50)
    );
    assert_eq!(
        calculate_change(Decimal::from(100), total, &ctx),
        Decimal::ZERO
    );
    // Insufficient payment is the validator's error, not negative change
    assert_eq!(
        calculate_change(Decimal::from(99), total, &ctx),
        Decimal::ZERO
    );
}

#[test]
fn test_global_discount() {
    let ctx = MoneyContext::default();
    let amount = Decimal::from(200);

    assert_eq!(
        apply_global_discount(amount, &GlobalDiscount::Percentage(Decimal::from(25)), &ctx),
        Decimal::from(150)
    );
    assert_eq!(
        apply_global_discount(amount, &GlobalDiscount::Fixed(Decimal::from(30)), &ctx),
        Decimal::from(170)
    );
    // Fixed discounts are not clamped here
    assert_eq!(
        apply_global_discount(amount, &GlobalDiscount::Fixed(Decimal::from(250)), &ctx),
        Decimal::from(-50)
    );
}

#[test]
fn test_margin_and_selling_price_are_inverse() {
    let ctx = MoneyContext::default();
    let cost = Decimal::from(80);

    let selling = calculate_selling_price(cost, Decimal::from(25), &ctx);
    assert_eq!(selling, Decimal::from(100));

    let margin = calculate_profit_margin(cost, selling, &ctx).unwrap();
    assert_eq!(margin, Decimal::from(25));
}

#[test]
fn test_margin_undefined_for_zero_cost() {
    let ctx = MoneyContext::default();
    let err = calculate_profit_margin(Decimal::ZERO, Decimal::from(10), &ctx).unwrap_err();
    assert_eq!(err.code, ErrorCode::DivisionByZero);
}

#[test]
fn test_split_payment_exact_shares() {
    let ctx = MoneyContext::default();
    let splits = [
        SplitSpec {
            method: PaymentMethod::Cash,
            percentage: Decimal::from(60),
        },
        SplitSpec {
            method: PaymentMethod::Card,
            percentage: Decimal::from(40),
        },
    ];

    let allocated = split_payment(Decimal::from(250), &splits, &ctx);
    assert_eq!(allocated[0].amount, Decimal::from(150));
    assert_eq!(allocated[1].amount, Decimal::from(100));
}

#[test]
fn test_split_payment_remainder_goes_to_first_split() {
    let ctx = MoneyContext::default();
    let third = Decimal::new(3_333, 2); // 33.33%
    let splits = [
        SplitSpec {
            method: PaymentMethod::Cash,
            percentage: third,
        },
        SplitSpec {
            method: PaymentMethod::Card,
            percentage: third,
        },
        SplitSpec {
            method: PaymentMethod::BankTransfer,
            percentage: third,
        },
    ];

    let allocated = split_payment(Decimal::from(100), &splits, &ctx);
    let sum: Decimal = allocated.iter().map(|s| s.amount).sum();

    // Shares always reconcile exactly with the rounded total
    assert_eq!(sum, Decimal::from(100));
    assert_eq!(allocated[0].amount, Decimal::new(33_34, 2));
    assert_eq!(allocated[1].amount, Decimal::new(33_33, 2));
    assert_eq!(allocated[2].amount, Decimal::new(33_33, 2));
}

#[test]
fn test_split_payment_empty() {
    let ctx = MoneyContext::default();
    assert!(split_payment(Decimal::from(100), &[], &ctx).is_empty());
}
