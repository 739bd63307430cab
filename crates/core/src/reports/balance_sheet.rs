//! Balance sheet assembly.

use chrono::{DateTime, Utc};
use finrecon_shared::types::amount_or_zero;
use rust_decimal::Decimal;

use super::types::{Assets, BalanceSheet, Liabilities};
use crate::inventory::StockValuation;
use crate::ledger::{BankAccount, Creditor, Customer, Machine, PayrollEntry, PayrollStatus};

/// Borrowed inputs for a balance sheet.
#[derive(Debug, Clone, Copy)]
pub struct BalanceSheetInputs<'a> {
    /// Bank accounts; inactive ones are ignored.
    pub bank_accounts: &'a [BankAccount],
    /// Customers.
    pub customers: &'a [Customer],
    /// Creditors.
    pub creditors: &'a [Creditor],
    /// Machines.
    pub machines: &'a [Machine],
    /// Payroll; only pending entries count.
    pub payroll: &'a [PayrollEntry],
}

/// Builds a [`BalanceSheet`] as of "now", independent of any period.
pub struct BalanceSheetAssembler;

impl BalanceSheetAssembler {
    /// Assembles the balance sheet.
    #[must_use]
    pub fn assemble(
        inputs: BalanceSheetInputs<'_>,
        valuation: &StockValuation,
        now: DateTime<Utc>,
    ) -> BalanceSheet {
        let cash: Decimal = inputs
            .bank_accounts
            .iter()
            .filter(|a| a.is_active)
            .map(|a| amount_or_zero(a.current_balance))
            .sum();
        let receivables = total(inputs.customers.iter().map(|c| c.credit_balance));
        let stock = valuation.value_at(now);
        let fixed_assets = total(inputs.machines.iter().map(|m| m.purchase_cost));

        let payables = total(inputs.creditors.iter().map(|c| c.outstanding_balance));
        let payroll = total(
            inputs
                .payroll
                .iter()
                .filter(|p| p.status == PayrollStatus::Pending)
                .map(|p| p.net_salary),
        );

        let assets = Assets {
            cash,
            receivables,
            stock,
            fixed_assets,
            total: cash + receivables + stock + fixed_assets,
        };
        let liabilities = Liabilities {
            payables,
            payroll,
            total: payables + payroll,
        };
        let equity = assets.total - liabilities.total;

        BalanceSheet {
            assets,
            liabilities,
            equity,
        }
    }
}

fn total(amounts: impl Iterator<Item = Option<Decimal>>) -> Decimal {
    amounts.map(amount_or_zero).sum()
}
