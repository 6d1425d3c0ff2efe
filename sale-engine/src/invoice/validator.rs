//! Server-side invoice validation

use rust_decimal::Decimal;
use shared::models::{ApprovedInvoice, InvoiceDraft, MismatchWarning, SanitizedItem};
use shared::{AppError, ErrorCode};
use uuid::Uuid;

use crate::money::{MONEY_TOLERANCE, MoneyContext, percentage, require_valid_amount};
use crate::pricing::calculate_invoice_totals;

/// Two-tier tolerance thresholds for client/server total comparison
///
/// Deployment policy, not a universal constant: the minimal currency unit
/// and acceptable drift percentage differ per installation. A difference
/// is rejected only when it exceeds both thresholds; a tolerated nonzero
/// difference is surfaced as a [`MismatchWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TolerancePolicy {
    /// Absolute threshold, one minimal currency unit by default (0.01)
    pub absolute: Decimal,
    /// Relative threshold as a percentage of the server-computed value
    pub relative_percent: Decimal,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self {
            absolute: MONEY_TOLERANCE,
            relative_percent: Decimal::ONE,
        }
    }
}

/// Validate a client-submitted invoice and compute authoritative figures
///
/// Recomputes every total from the submitted line items (price and
/// quantity only); the client's subtotal/discount/total are never trusted,
/// only compared against. On success the returned figures are the
/// server's, with a sanitized item list and any tolerated mismatch
/// warnings for the caller to record.
///
/// `has_open_shift` must come from persistence under an atomic
/// check-then-act guarantee (one open shift per operator, transactional
/// invoice creation). That serialization is a hard requirement of the
/// persistence layer, not an optimization; this function only enforces
/// the precondition it is handed.
pub fn validate_invoice(
    draft: &InvoiceDraft,
    has_open_shift: bool,
    policy: &TolerancePolicy,
    ctx: &MoneyContext,
) -> Result<ApprovedInvoice, AppError> {
    // Structural preconditions
    if draft.items.is_empty() {
        return Err(AppError::new(ErrorCode::InvoiceEmpty));
    }
    if draft.payments.is_empty() {
        return Err(AppError::new(ErrorCode::PaymentsEmpty));
    }
    if !has_open_shift {
        return Err(AppError::shift_not_open());
    }

    // Every monetary field must fit the persistence range before any
    // arithmetic touches it
    for (idx, item) in draft.items.iter().enumerate() {
        require_valid_amount(item.unit_price, &format!("items[{}].unit_price", idx))?;
        require_valid_amount(item.quantity, &format!("items[{}].quantity", idx))?;
        if item.quantity <= Decimal::ZERO {
            return Err(AppError::invalid_quantity(
                format!("items[{}].quantity", idx),
                item.quantity,
            ));
        }
        require_percent(item.discount_percent, || {
            format!("items[{}].discount_percent", idx)
        })?;
        require_percent(item.tax_rate, || format!("items[{}].tax_rate", idx))?;
    }

    require_valid_amount(draft.subtotal, "subtotal")?;
    require_valid_amount(draft.discount, "discount")?;
    require_valid_amount(draft.total, "total")?;

    for (idx, payment) in draft.payments.iter().enumerate() {
        require_valid_amount(payment.amount, &format!("payments[{}].amount", idx))?;
        if payment.amount <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::PaymentInvalidAmount)
                .with_detail("field", format!("payments[{}].amount", idx))
                .with_detail("value", payment.amount.to_string()));
        }
    }

    // Independent recomputation from server-trusted inputs only
    let totals = calculate_invoice_totals(&draft.items, ctx);

    let mut warnings = Vec::new();
    check_total_field("subtotal", draft.subtotal, totals.subtotal, policy, &mut warnings)?;
    check_total_field("total", draft.total, totals.total, policy, &mut warnings)?;

    // Payment reconciliation is strictly absolute: it governs literal
    // cash handed over, so no relative allowance applies
    let payments_total: Decimal = draft.payments.iter().map(|p| p.amount).sum();
    let payment_diff = (payments_total - totals.total).abs();
    if payment_diff > policy.absolute {
        tracing::warn!(
            payments_total = %payments_total,
            invoice_total = %totals.total,
            difference = %payment_diff,
            "payments do not reconcile with invoice total"
        );
        return Err(AppError::new(ErrorCode::PaymentMismatch)
            .with_detail("payments_total", payments_total.to_string())
            .with_detail("invoice_total", totals.total.to_string())
            .with_detail("difference", payment_diff.to_string()));
    }

    Ok(ApprovedInvoice {
        subtotal: totals.subtotal,
        discount: totals.discount,
        tax: totals.tax,
        total: totals.total,
        items: draft.items.iter().map(sanitize_item).collect(),
        warnings,
    })
}

fn require_percent(
    value: Option<Decimal>,
    field: impl Fn() -> String,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&v) {
            return Err(AppError::invalid_percentage(field(), v));
        }
    }
    Ok(())
}

/// Two-tier comparison of one client figure against the server's
///
/// Rejection requires the difference to exceed both the absolute and the
/// relative threshold; any tolerated nonzero difference is recorded as a
/// warning. The hard-mismatch error carries the full comparison in its
/// details but a caller-facing message that does not reveal the
/// thresholds.
fn check_total_field(
    field: &str,
    client: Decimal,
    server: Decimal,
    policy: &TolerancePolicy,
    warnings: &mut Vec<MismatchWarning>,
) -> Result<(), AppError> {
    let difference = (client - server).abs();
    if difference.is_zero() {
        return Ok(());
    }

    let within_absolute = difference <= policy.absolute;
    let within_relative = difference <= percentage(server.abs(), policy.relative_percent);

    if !within_absolute && !within_relative {
        tracing::error!(
            field,
            client = %client,
            server = %server,
            difference = %difference,
            "client/server totals disagree beyond tolerance"
        );
        return Err(AppError::new(ErrorCode::TotalsMismatch)
            .with_detail("field", field)
            .with_detail("client_value", client.to_string())
            .with_detail("server_value", server.to_string())
            .with_detail("difference", difference.to_string()));
    }

    tracing::warn!(
        field,
        client = %client,
        server = %server,
        difference = %difference,
        "client totals drift within tolerance"
    );
    warnings.push(MismatchWarning {
        field: field.to_string(),
        client_value: client,
        server_value: server,
        difference,
    });
    Ok(())
}

/// Keep only the fields the server trusts; a product reference survives
/// only when it is a well-formed record id, otherwise it is nulled so
/// persistence re-resolves it
fn sanitize_item(item: &shared::models::LineItemInput) -> SanitizedItem {
    SanitizedItem {
        product_id: item
            .product_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok()),
        unit_price: item.unit_price,
        quantity: item.quantity,
    }
}
