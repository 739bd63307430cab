//! Report orchestration over a [`LedgerSource`].

use chrono::{DateTime, Utc};
use finrecon_shared::config::ReportConfig;
use tracing::{debug, info, instrument};

use super::error::{ReportError, SourceError};
use super::service::ReportService;
use super::source::{LedgerSource, SourceData};
use super::types::{CashSummary, CategoryBreakdown, FinancialReport};
use crate::ledger::{Period, PeriodRequest};

/// Fetches ledgers concurrently and assembles reports from them.
///
/// All reads for one request run as a single joined group. The first
/// failure aborts the request and drops the remaining reads.
#[derive(Debug, Clone)]
pub struct ReportGenerator<S> {
    source: S,
    config: ReportConfig,
}

impl<S: LedgerSource> ReportGenerator<S> {
    /// Creates a generator.
    #[must_use]
    pub const fn new(source: S, config: ReportConfig) -> Self {
        Self { source, config }
    }

    /// The underlying ledger source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Profit and loss for the period plus the balance sheet as of now.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] for a reversed period and
    /// [`ReportError::Source`] if any ledger read fails.
    pub async fn generate_financial_report(
        &self,
        request: PeriodRequest,
    ) -> Result<FinancialReport, ReportError> {
        self.generate_financial_report_at(request, Utc::now()).await
    }

    /// [`Self::generate_financial_report`] with an explicit clock.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_financial_report`].
    #[instrument(skip(self), err)]
    pub async fn generate_financial_report_at(
        &self,
        request: PeriodRequest,
        now: DateTime<Utc>,
    ) -> Result<FinancialReport, ReportError> {
        let period = request.resolve(now)?;
        let data = self.fetch_financial(period, now).await?;
        let report = ReportService::financial_report(period, now, &data, self.config.currency);

        info!(
            revenue = %report.profit_and_loss.revenue,
            net_profit = %report.profit_and_loss.net_profit,
            equity = %report.balance_sheet.equity,
            "Financial report generated"
        );
        Ok(report)
    }

    /// Expense totals per category for the period.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] for a reversed period and
    /// [`ReportError::Source`] if any ledger read fails.
    pub async fn group_expenses_by_category(
        &self,
        request: PeriodRequest,
    ) -> Result<Vec<CategoryBreakdown>, ReportError> {
        self.group_expenses_by_category_at(request, Utc::now()).await
    }

    /// [`Self::group_expenses_by_category`] with an explicit clock.
    ///
    /// # Errors
    ///
    /// Same as [`Self::group_expenses_by_category`].
    #[instrument(skip(self), err)]
    pub async fn group_expenses_by_category_at(
        &self,
        request: PeriodRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<CategoryBreakdown>, ReportError> {
        let period = request.resolve(now)?;
        let (expenses, bank_transactions) = tokio::try_join!(
            self.source.expenses(period),
            self.source.bank_transactions(period),
        )?;
        debug!(
            expenses = expenses.len(),
            bank_transactions = bank_transactions.len(),
            "Fetched expense ledgers"
        );
        Ok(ReportService::expense_categories(
            period,
            &expenses,
            &bank_transactions,
        ))
    }

    /// Cash received and paid out in the period.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] for a reversed period and
    /// [`ReportError::Source`] if any ledger read fails.
    pub async fn generate_cash_summary(
        &self,
        request: PeriodRequest,
    ) -> Result<CashSummary, ReportError> {
        self.generate_cash_summary_at(request, Utc::now()).await
    }

    /// [`Self::generate_cash_summary`] with an explicit clock.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_cash_summary`].
    #[instrument(skip(self), err)]
    pub async fn generate_cash_summary_at(
        &self,
        request: PeriodRequest,
        now: DateTime<Utc>,
    ) -> Result<CashSummary, ReportError> {
        let period = request.resolve(now)?;
        let (payments, bank_transactions) = tokio::try_join!(
            self.source.payments(period),
            self.source.bank_transactions(period),
        )?;
        debug!(
            payments = payments.len(),
            bank_transactions = bank_transactions.len(),
            "Fetched cash ledgers"
        );
        Ok(ReportService::cash_summary(
            period,
            &payments,
            &bank_transactions,
        ))
    }

    async fn fetch_financial(
        &self,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<SourceData, SourceError> {
        let source = &self.source;
        // Events after the earliest cutoff cover every reconstruction.
        let earliest_cutoff = period.from().min(now);

        let (
            sales_orders,
            expenses,
            bank_transactions,
            paid_payroll,
            pending_payroll,
            bank_accounts,
            customers,
            creditors,
            machines,
            inventory_items,
            raw_materials,
            stock_events,
        ) = tokio::try_join!(
            source.sales_orders(period),
            source.expenses(period),
            source.bank_transactions(period),
            source.paid_payroll(period),
            source.pending_payroll(),
            source.bank_accounts(),
            source.customers(),
            source.creditors(),
            source.machines(),
            source.inventory_items(),
            source.raw_materials(),
            source.stock_events_after(earliest_cutoff),
        )?;

        debug!(
            sales_orders = sales_orders.len(),
            expenses = expenses.len(),
            bank_transactions = bank_transactions.len(),
            payroll = paid_payroll.len() + pending_payroll.len(),
            inventory_items = inventory_items.len(),
            stock_events = stock_events.len(),
            "Fetched ledgers"
        );

        Ok(SourceData {
            sales_orders,
            expenses,
            bank_transactions,
            paid_payroll,
            pending_payroll,
            bank_accounts,
            customers,
            creditors,
            machines,
            inventory_items,
            raw_materials,
            stock_events,
        })
    }
}
