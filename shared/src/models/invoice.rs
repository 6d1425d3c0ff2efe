//! Invoice models
//!
//! Client-submitted sale payloads and the server-authoritative figures
//! derived from them. The draft carries client-computed totals purely as
//! the object of comparison; the engine never trusts them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Physical cash into the drawer
    Cash,
    /// Bank transfer
    BankTransfer,
    /// Customer account-balance credit
    AccountCredit,
    /// Card terminal
    Card,
}

/// One sold product line as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Client-supplied product reference (re-validated during sanitization)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Product name snapshot
    pub name: String,
    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Quantity, fractional for weight/volume-based units
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Discount percentage (0-100)
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_percent: Option<Decimal>,
    /// Tax rate percentage (0-100)
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,
}

/// Derived figures for a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Aggregate invoice figures
///
/// Invariant: total = subtotal - discount + tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvoiceTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Payment input for an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub method: PaymentMethod,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Optional reference code (transfer reference, card slip, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Customer reference on the sale request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Client-submitted invoice creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    pub items: Vec<LineItemInput>,
    pub payments: Vec<PaymentInput>,
    /// Client-computed subtotal (object of comparison only)
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Client-computed discount (object of comparison only)
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    /// Client-computed total (object of comparison only)
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Line item reduced to the fields the server trusts
///
/// Any client product reference that is not a well-formed record id is
/// nulled so the persistence layer re-resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
}

/// A tolerated client/server disagreement, reported but not fatal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchWarning {
    /// Name of the disputed field ("subtotal", "total")
    pub field: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub client_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub server_value: Decimal,
    /// Absolute difference
    #[serde(with = "rust_decimal::serde::float")]
    pub difference: Decimal,
}

/// Server-authoritative result of a successful validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovedInvoice {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Sanitized item list to persist (price and quantity only)
    pub items: Vec<SanitizedItem>,
    /// Minor mismatches the caller may record as telemetry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MismatchWarning>,
}
