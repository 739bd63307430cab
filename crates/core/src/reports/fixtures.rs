//! In-memory ledger source and row builders for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use finrecon_shared::types::{SalesOrderId, VariantId};
use rust_decimal::Decimal;

use super::error::SourceError;
use super::source::{LedgerSource, SourceData};
use crate::inventory::{InventoryItem, RawMaterial, StockEvent};
use crate::ledger::{
    BankAccount, BankTransaction, Creditor, Customer, Expense, ExpenseCategory, Machine, Payment,
    PayrollEntry, PayrollStatus, Period, SalesOrder,
};

pub fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sale(amount: Decimal, at: DateTime<Utc>) -> SalesOrder {
    SalesOrder {
        id: SalesOrderId::new(),
        total_amount: Some(amount),
        subtotal: Some(amount),
        created_at: at,
    }
}

pub fn expense(category: &str, amount: Decimal, on: NaiveDate) -> Expense {
    Expense {
        amount: Some(amount),
        category: ExpenseCategory::parse(category),
        is_manufacturing_cost: false,
        expense_date: on,
    }
}

pub fn bank(transaction_type: &str, amount: Decimal, on: NaiveDate) -> BankTransaction {
    BankTransaction {
        transaction_type: transaction_type.to_string(),
        amount: Some(amount),
        transaction_date: on,
        description: None,
        reference_number: None,
    }
}

pub fn payroll(amount: Decimal, status: PayrollStatus, paid_at: Option<DateTime<Utc>>) -> PayrollEntry {
    PayrollEntry {
        net_salary: Some(amount),
        status,
        paid_at,
    }
}

pub fn payment(amount: Decimal, at: DateTime<Utc>) -> Payment {
    Payment {
        amount: Some(amount),
        created_at: at,
    }
}

pub fn stock(variant_id: VariantId, quantity: i64, unit_cost: Decimal) -> InventoryItem {
    InventoryItem {
        variant_id,
        quantity: Some(quantity),
        unit_cost: Some(unit_cost),
    }
}

pub fn stock_event(variant_id: VariantId, change: i64, at: DateTime<Utc>) -> StockEvent {
    StockEvent {
        variant_id,
        quantity_change: change,
        occurred_at: at,
    }
}

/// Serves every ledger from memory, ignoring filters.
///
/// Returning supersets checks that assemblers re-filter. Payroll is a single
/// list served to both payroll reads for the same reason.
#[derive(Debug, Default)]
pub struct InMemoryLedgerSource {
    pub data: SourceData,
    pub payments: Vec<Payment>,
    pub payroll: Vec<PayrollEntry>,
    pub fail_on: Option<&'static str>,
    pub reads: AtomicUsize,
}

impl InMemoryLedgerSource {
    pub fn new(data: SourceData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, ledger: &'static str) -> Self {
        self.fail_on = Some(ledger);
        self
    }

    fn read<T: Clone>(&self, ledger: &'static str, rows: &[T]) -> Result<Vec<T>, SourceError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(ledger) {
            return Err(SourceError::new(ledger, "simulated outage"));
        }
        Ok(rows.to_vec())
    }

    fn payroll_rows(&self) -> Vec<PayrollEntry> {
        let mut rows = self.payroll.clone();
        rows.extend(self.data.paid_payroll.iter().cloned());
        rows.extend(self.data.pending_payroll.iter().cloned());
        rows
    }
}

#[async_trait]
impl LedgerSource for InMemoryLedgerSource {
    async fn sales_orders(&self, _period: Period) -> Result<Vec<SalesOrder>, SourceError> {
        self.read("sales_orders", &self.data.sales_orders)
    }

    async fn payments(&self, _period: Period) -> Result<Vec<Payment>, SourceError> {
        self.read("payments", &self.payments)
    }

    async fn expenses(&self, _period: Period) -> Result<Vec<Expense>, SourceError> {
        self.read("expenses", &self.data.expenses)
    }

    async fn bank_transactions(
        &self,
        _period: Period,
    ) -> Result<Vec<BankTransaction>, SourceError> {
        self.read("bank_transactions", &self.data.bank_transactions)
    }

    async fn paid_payroll(&self, _period: Period) -> Result<Vec<PayrollEntry>, SourceError> {
        self.read("payroll", &self.payroll_rows())
    }

    async fn pending_payroll(&self) -> Result<Vec<PayrollEntry>, SourceError> {
        self.read("payroll", &self.payroll_rows())
    }

    async fn bank_accounts(&self) -> Result<Vec<BankAccount>, SourceError> {
        self.read("bank_accounts", &self.data.bank_accounts)
    }

    async fn customers(&self) -> Result<Vec<Customer>, SourceError> {
        self.read("customers", &self.data.customers)
    }

    async fn creditors(&self) -> Result<Vec<Creditor>, SourceError> {
        self.read("creditors", &self.data.creditors)
    }

    async fn machines(&self) -> Result<Vec<Machine>, SourceError> {
        self.read("machines", &self.data.machines)
    }

    async fn inventory_items(&self) -> Result<Vec<InventoryItem>, SourceError> {
        self.read("inventory", &self.data.inventory_items)
    }

    async fn raw_materials(&self) -> Result<Vec<RawMaterial>, SourceError> {
        self.read("raw_materials", &self.data.raw_materials)
    }

    async fn stock_events_after(
        &self,
        _cutoff: DateTime<Utc>,
    ) -> Result<Vec<StockEvent>, SourceError> {
        self.read("inventory_transactions", &self.data.stock_events)
    }
}
