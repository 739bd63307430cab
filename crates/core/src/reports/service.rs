//! Report generation service.
//!
//! Pure functions over already fetched ledger data.

use chrono::{DateTime, Utc};
use finrecon_shared::types::Currency;

use super::balance_sheet::{BalanceSheetAssembler, BalanceSheetInputs};
use super::cash;
use super::categories::CategoryAggregator;
use super::classifier::{ExpenseClassifier, ExpenseLine};
use super::profit_loss::ProfitLossAssembler;
use super::source::SourceData;
use super::types::{CashSummary, CategoryBreakdown, FinancialReport};
use crate::inventory::StockValuation;
use crate::ledger::{BankTransaction, Expense, Payment, Period};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Builds the combined profit and loss and balance sheet.
    ///
    /// Stock is reconstructed at `period.from`, `period.to` and `now`.
    #[must_use]
    pub fn financial_report(
        period: Period,
        now: DateTime<Utc>,
        data: &SourceData,
        currency: Currency,
    ) -> FinancialReport {
        let valuation = StockValuation::from_ledgers(
            &data.inventory_items,
            &data.raw_materials,
            data.stock_events.clone(),
        );
        let partition = ExpenseClassifier::classify_lines(ExpenseClassifier::expense_stream(
            &data.expenses,
            &data.bank_transactions,
        ));

        let profit_and_loss = ProfitLossAssembler::assemble(
            period,
            &data.sales_orders,
            &partition,
            &data.paid_payroll,
            &valuation,
        );
        let balance_sheet = BalanceSheetAssembler::assemble(
            BalanceSheetInputs {
                bank_accounts: &data.bank_accounts,
                customers: &data.customers,
                creditors: &data.creditors,
                machines: &data.machines,
                payroll: &data.pending_payroll,
            },
            &valuation,
            now,
        );

        FinancialReport {
            profit_and_loss,
            balance_sheet,
            currency,
        }
    }

    /// Expense totals per category for lines dated in `period`.
    #[must_use]
    pub fn expense_categories(
        period: Period,
        expenses: &[Expense],
        bank_transactions: &[BankTransaction],
    ) -> Vec<CategoryBreakdown> {
        let lines: Vec<ExpenseLine> = ExpenseClassifier::expense_stream(expenses, bank_transactions)
            .into_iter()
            .filter(|l| period.contains_date(l.date))
            .collect();
        CategoryAggregator::group(&lines)
    }

    /// Cash received and paid out in `period`.
    #[must_use]
    pub fn cash_summary(
        period: Period,
        payments: &[Payment],
        bank_transactions: &[BankTransaction],
    ) -> CashSummary {
        cash::cash_summary(period, payments, bank_transactions)
    }
}
