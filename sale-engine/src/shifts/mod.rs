//! Cash shift reconciliation
//!
//! Expected-cash and discrepancy figures for a drawer shift. A shift is
//! created open with an operator-supplied opening amount, mutated only by
//! appending cash payments and manual movements, and closed exactly once;
//! closing freezes the figures. The one-open-shift-per-operator guarantee
//! lives in the persistence layer, not here.

use rust_decimal::Decimal;
use shared::AppError;
use shared::models::{
    CashMovement, CashMovementKind, PaymentInput, PaymentMethod, ShiftReconciliation,
    ShiftStatus, ShiftSummary,
};

/// In-memory lifecycle of a cash drawer shift
#[derive(Debug, Clone)]
pub struct CashShift {
    status: ShiftStatus,
    opening_amount: Decimal,
    sales_cash: Decimal,
    manual_income: Decimal,
    manual_expense: Decimal,
    reconciliation: Option<ShiftReconciliation>,
}

impl CashShift {
    /// Open a shift with the counted opening amount
    pub fn open(opening_amount: Decimal) -> Self {
        Self {
            status: ShiftStatus::Open,
            opening_amount,
            sales_cash: Decimal::ZERO,
            manual_income: Decimal::ZERO,
            manual_expense: Decimal::ZERO,
            reconciliation: None,
        }
    }

    pub fn status(&self) -> ShiftStatus {
        self.status
    }

    /// Append a cash-method sale payment to the drawer
    pub fn record_cash_payment(&mut self, amount: Decimal) -> Result<(), AppError> {
        self.require_open()?;
        self.sales_cash += amount;
        Ok(())
    }

    /// Append a manual movement (income or expense)
    pub fn record_movement(&mut self, movement: &CashMovement) -> Result<(), AppError> {
        self.require_open()?;
        match movement.kind {
            CashMovementKind::Income => self.manual_income += movement.amount,
            CashMovementKind::Expense => self.manual_expense += movement.amount,
        }
        Ok(())
    }

    /// Live summary; expected cash is recomputed on every read while the
    /// shift is open so it always reflects the latest appended entries
    pub fn summary(&self) -> ShiftSummary {
        let expected_cash =
            self.opening_amount + self.sales_cash + self.manual_income - self.manual_expense;
        ShiftSummary {
            opening_amount: self.opening_amount,
            sales_cash: self.sales_cash,
            manual_income: self.manual_income,
            manual_expense: self.manual_expense,
            expected_cash,
        }
    }

    /// Close the shift against the counted cash: a one-way transition
    ///
    /// Expected cash is fixed at the closing snapshot; further appends
    /// fail, so the reconciliation never shifts under late data.
    pub fn close(&mut self, actual_cash: Decimal) -> Result<ShiftReconciliation, AppError> {
        self.require_open()?;
        let reconciliation = validate_shift_close(&self.summary(), actual_cash);
        self.status = ShiftStatus::Closed;
        self.reconciliation = Some(reconciliation.clone());
        Ok(reconciliation)
    }

    /// Closing figures, present once the shift is closed
    pub fn reconciliation(&self) -> Option<&ShiftReconciliation> {
        self.reconciliation.as_ref()
    }

    fn require_open(&self) -> Result<(), AppError> {
        if self.status == ShiftStatus::Closed {
            return Err(AppError::shift_already_closed());
        }
        Ok(())
    }
}

/// Build a shift summary from the movement and payment log
///
/// Only cash-method payments count toward the drawer; card, transfer and
/// account-credit payments never touch it.
pub fn compute_shift_summary(
    opening_amount: Decimal,
    movements: &[CashMovement],
    payments: &[PaymentInput],
) -> ShiftSummary {
    let sales_cash = payments
        .iter()
        .filter(|p| p.method == PaymentMethod::Cash)
        .map(|p| p.amount)
        .sum();

    let mut manual_income = Decimal::ZERO;
    let mut manual_expense = Decimal::ZERO;
    for movement in movements {
        match movement.kind {
            CashMovementKind::Income => manual_income += movement.amount,
            CashMovementKind::Expense => manual_expense += movement.amount,
        }
    }

    let expected_cash = opening_amount + sales_cash + manual_income - manual_expense;
    ShiftSummary {
        opening_amount,
        sales_cash,
        manual_income,
        manual_expense,
        expected_cash,
    }
}

/// Reconcile counted cash against the expected figure
///
/// difference = actual - expected, deliberately unclamped: a shortage is
/// a meaningful signal, not an error.
pub fn validate_shift_close(summary: &ShiftSummary, actual_cash: Decimal) -> ShiftReconciliation {
    ShiftReconciliation {
        expected_cash: summary.expected_cash,
        actual_cash,
        difference: actual_cash - summary.expected_cash,
    }
}
