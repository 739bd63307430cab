//! Cash-basis summary.

use finrecon_shared::types::amount_or_zero;
use rust_decimal::Decimal;

use super::types::CashSummary;
use crate::ledger::{BankTransaction, Payment, Period};

/// Money received and paid out in `period`.
///
/// Receipts come from the payments ledger; disbursements are bank outflows.
#[must_use]
pub fn cash_summary(
    period: Period,
    payments: &[Payment],
    bank_transactions: &[BankTransaction],
) -> CashSummary {
    let received: Decimal = payments
        .iter()
        .filter(|p| period.contains(p.created_at))
        .map(|p| amount_or_zero(p.amount))
        .sum();
    let disbursed: Decimal = bank_transactions
        .iter()
        .filter(|t| t.flow().is_outflow() && period.contains_date(t.transaction_date))
        .map(|t| amount_or_zero(t.amount))
        .sum();

    CashSummary {
        received,
        disbursed,
        net: received - disbursed,
    }
}
