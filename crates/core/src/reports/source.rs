//! Ledger access seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::SourceError;
use crate::inventory::{InventoryItem, RawMaterial, StockEvent};
use crate::ledger::{
    BankAccount, BankTransaction, Creditor, Customer, Expense, Machine, Payment, PayrollEntry,
    Period, SalesOrder,
};

/// Read-only access to the ledgers a report is built from.
///
/// Period-filtered reads may return a superset of the requested rows; every
/// assembler re-applies the exact half-open filter.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// Sales orders created in `period`.
    async fn sales_orders(&self, period: Period) -> Result<Vec<SalesOrder>, SourceError>;

    /// Payments recorded in `period`.
    async fn payments(&self, period: Period) -> Result<Vec<Payment>, SourceError>;

    /// Expenses dated in `period`.
    async fn expenses(&self, period: Period) -> Result<Vec<Expense>, SourceError>;

    /// Bank transactions dated in `period`.
    async fn bank_transactions(&self, period: Period)
    -> Result<Vec<BankTransaction>, SourceError>;

    /// Payroll entries paid in `period`.
    async fn paid_payroll(&self, period: Period) -> Result<Vec<PayrollEntry>, SourceError>;

    /// Payroll entries still owed.
    async fn pending_payroll(&self) -> Result<Vec<PayrollEntry>, SourceError>;

    /// All bank accounts.
    async fn bank_accounts(&self) -> Result<Vec<BankAccount>, SourceError>;

    /// All customers.
    async fn customers(&self) -> Result<Vec<Customer>, SourceError>;

    /// All creditors.
    async fn creditors(&self) -> Result<Vec<Creditor>, SourceError>;

    /// All machines.
    async fn machines(&self) -> Result<Vec<Machine>, SourceError>;

    /// Current finished-goods inventory.
    async fn inventory_items(&self) -> Result<Vec<InventoryItem>, SourceError>;

    /// Current raw-material stock.
    async fn raw_materials(&self) -> Result<Vec<RawMaterial>, SourceError>;

    /// Stock quantity changes after `cutoff`.
    async fn stock_events_after(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<StockEvent>, SourceError>;
}

/// Everything a financial report is computed from.
#[derive(Debug, Clone, Default)]
pub struct SourceData {
    /// Sales orders.
    pub sales_orders: Vec<SalesOrder>,
    /// Expense ledger.
    pub expenses: Vec<Expense>,
    /// Bank transactions.
    pub bank_transactions: Vec<BankTransaction>,
    /// Paid payroll.
    pub paid_payroll: Vec<PayrollEntry>,
    /// Pending payroll.
    pub pending_payroll: Vec<PayrollEntry>,
    /// Bank accounts.
    pub bank_accounts: Vec<BankAccount>,
    /// Customers.
    pub customers: Vec<Customer>,
    /// Creditors.
    pub creditors: Vec<Creditor>,
    /// Machines.
    pub machines: Vec<Machine>,
    /// Finished-goods inventory.
    pub inventory_items: Vec<InventoryItem>,
    /// Raw materials.
    pub raw_materials: Vec<RawMaterial>,
    /// Stock events after the earliest cutoff.
    pub stock_events: Vec<StockEvent>,
}
