//! Profit and loss assembly.
//!
//! COGS follows the periodic inventory method:
//! `cogs = opening stock + purchases - closing stock`.

use finrecon_shared::types::amount_or_zero;
use rust_decimal::Decimal;

use super::classifier::ExpensePartition;
use super::types::{Breakdown, ProfitAndLoss};
use crate::inventory::StockValuation;
use crate::ledger::{PayrollEntry, PayrollStatus, Period, SalesOrder};

/// Builds [`ProfitAndLoss`] for a period.
pub struct ProfitLossAssembler;

impl ProfitLossAssembler {
    /// Assembles the statement. Every input is re-filtered to `period`, so
    /// callers may pass supersets.
    #[must_use]
    pub fn assemble(
        period: Period,
        sales_orders: &[SalesOrder],
        partition: &ExpensePartition,
        payroll: &[PayrollEntry],
        valuation: &StockValuation,
    ) -> ProfitAndLoss {
        let revenue = Self::revenue(period, sales_orders);
        let in_period = partition.within(period);

        let opening_stock = valuation.value_at(period.from());
        let closing_stock = valuation.value_at(period.to());
        let purchases = in_period.purchases_total();
        let cogs = opening_stock + purchases - closing_stock;

        let manufacturing = in_period.manufacturing_total();
        let general = in_period.general_total() + manufacturing;
        let payroll = Self::paid_payroll(period, payroll);

        let expenses = general + payroll;
        let gross_profit = revenue - cogs;
        let net_profit = gross_profit - expenses;

        ProfitAndLoss {
            revenue,
            expenses,
            gross_profit,
            net_profit,
            breakdown: Breakdown {
                general,
                payroll,
                cogs,
                opening_stock,
                purchases,
                closing_stock,
                manufacturing,
            },
        }
    }

    /// Σ `total_amount` of orders created in the period.
    #[must_use]
    pub fn revenue(period: Period, sales_orders: &[SalesOrder]) -> Decimal {
        sales_orders
            .iter()
            .filter(|o| period.contains(o.created_at))
            .map(|o| amount_or_zero(o.total_amount))
            .sum()
    }

    /// Σ `net_salary` of entries paid in the period.
    #[must_use]
    pub fn paid_payroll(period: Period, payroll: &[PayrollEntry]) -> Decimal {
        payroll
            .iter()
            .filter(|p| p.status == PayrollStatus::Paid)
            .filter(|p| p.paid_at.is_some_and(|at| period.contains(at)))
            .map(|p| amount_or_zero(p.net_salary))
            .sum()
    }
}
