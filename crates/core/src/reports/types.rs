//! Report data types.
//!
//! Field names serialize in camelCase and are a public contract.

use finrecon_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Components behind the profit and loss totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// General operating expenses, manufacturing included.
    pub general: Decimal,
    /// Paid payroll.
    pub payroll: Decimal,
    /// Cost of goods sold.
    pub cogs: Decimal,
    /// Stock value at period start.
    pub opening_stock: Decimal,
    /// Stock purchases in the period.
    pub purchases: Decimal,
    /// Stock value at period end.
    pub closing_stock: Decimal,
    /// Manufacturing expenses, also counted in `general`.
    pub manufacturing: Decimal,
}

/// Profit and loss for a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAndLoss {
    /// Accrual revenue.
    pub revenue: Decimal,
    /// Operating expenses: general plus payroll.
    pub expenses: Decimal,
    /// Revenue minus COGS.
    pub gross_profit: Decimal,
    /// Gross profit minus expenses.
    pub net_profit: Decimal,
    /// Components.
    pub breakdown: Breakdown,
}

/// Asset side of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    /// Active bank account balances.
    pub cash: Decimal,
    /// Customer credit balances.
    pub receivables: Decimal,
    /// Inventory value now.
    pub stock: Decimal,
    /// Machines at acquisition cost.
    pub fixed_assets: Decimal,
    /// Sum of the above.
    pub total: Decimal,
}

/// Liability side of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liabilities {
    /// Creditor balances.
    pub payables: Decimal,
    /// Pending payroll.
    pub payroll: Decimal,
    /// Sum of the above.
    pub total: Decimal,
}

/// Balance sheet as of now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Assets.
    pub assets: Assets,
    /// Liabilities.
    pub liabilities: Liabilities,
    /// Assets minus liabilities.
    pub equity: Decimal,
}

/// Combined profit and loss and balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    /// Period results.
    #[serde(flatten)]
    pub profit_and_loss: ProfitAndLoss,
    /// Position now.
    #[serde(flatten)]
    pub balance_sheet: BalanceSheet,
    /// Reporting currency.
    pub currency: Currency,
}

/// Share of expenses under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Category label.
    pub name: String,
    /// Total under the label.
    pub amount: Decimal,
    /// Whole-number share of the overall total.
    pub percentage: Decimal,
}

/// Cash-basis movement for a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSummary {
    /// Payments received.
    pub received: Decimal,
    /// Bank outflows.
    pub disbursed: Decimal,
    /// Received minus disbursed.
    pub net: Decimal,
}
