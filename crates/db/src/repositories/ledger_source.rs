//! `SeaORM` implementation of the report ledger source.
//!
//! Date filters are pushed into SQL as a coarse superset: date columns are
//! compared by calendar day and the open lower bound is never sent. The
//! report assemblers apply the exact half-open period afterwards.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use finrecon_core::inventory::{InventoryItem, RawMaterial, StockEvent};
use finrecon_core::ledger::{
    BankAccount, BankTransaction, Creditor, Customer, Expense, ExpenseCategory, Machine, Payment,
    PayrollEntry, PayrollStatus, Period, SalesOrder,
};
use finrecon_core::reports::{LedgerSource, SourceError};
use finrecon_shared::types::{SalesOrderId, VariantId};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryTrait};
use tracing::debug;

use crate::entities::{
    bank_accounts, bank_transactions, creditors, customers, expenses, inventory,
    inventory_transactions, machines, payments, payroll, raw_materials, sales_orders,
};

const PAID: &str = "paid";
const PENDING: &str = "pending";

/// Ledger source backed by the operational database.
#[derive(Debug)]
pub struct LedgerSourceRepository {
    db: DatabaseConnection,
}

impl LedgerSourceRepository {
    /// Creates a new ledger source repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gives back the connection, e.g. to inspect a mock transaction log.
    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DatabaseConnection {
        self.db
    }
}

/// Lower bound worth sending to the database; the open start is omitted.
fn lower_bound(period: Period) -> Option<DateTime<Utc>> {
    (period.from() != DateTime::<Utc>::MIN_UTC).then(|| period.from())
}

fn first_day(period: Period) -> Option<NaiveDate> {
    lower_bound(period).map(|from| from.date_naive())
}

fn last_day(period: Period) -> NaiveDate {
    period.to().date_naive()
}

fn read_failed(ledger: &'static str) -> impl FnOnce(DbErr) -> SourceError {
    move |err| SourceError::new(ledger, err)
}

#[async_trait]
impl LedgerSource for LedgerSourceRepository {
    async fn sales_orders(&self, period: Period) -> Result<Vec<SalesOrder>, SourceError> {
        let rows = sales_orders::Entity::find()
            .apply_if(lower_bound(period), |q, from| {
                q.filter(sales_orders::Column::CreatedAt.gte(from))
            })
            .filter(sales_orders::Column::CreatedAt.lt(period.to()))
            .all(&self.db)
            .await
            .map_err(read_failed("sales_orders"))?;
        debug!(rows = rows.len(), "Read sales_orders");
        Ok(rows.into_iter().map(sales_order).collect())
    }

    async fn payments(&self, period: Period) -> Result<Vec<Payment>, SourceError> {
        let rows = payments::Entity::find()
            .apply_if(lower_bound(period), |q, from| {
                q.filter(payments::Column::CreatedAt.gte(from))
            })
            .filter(payments::Column::CreatedAt.lt(period.to()))
            .all(&self.db)
            .await
            .map_err(read_failed("payments"))?;
        debug!(rows = rows.len(), "Read payments");
        Ok(rows
            .into_iter()
            .map(|p| Payment {
                amount: p.amount,
                created_at: p.created_at,
            })
            .collect())
    }

    async fn expenses(&self, period: Period) -> Result<Vec<Expense>, SourceError> {
        let rows = expenses::Entity::find()
            .apply_if(first_day(period), |q, from| {
                q.filter(expenses::Column::ExpenseDate.gte(from))
            })
            .filter(expenses::Column::ExpenseDate.lte(last_day(period)))
            .all(&self.db)
            .await
            .map_err(read_failed("expenses"))?;
        debug!(rows = rows.len(), "Read expenses");
        Ok(rows.into_iter().map(expense).collect())
    }

    async fn bank_transactions(
        &self,
        period: Period,
    ) -> Result<Vec<BankTransaction>, SourceError> {
        let rows = bank_transactions::Entity::find()
            .apply_if(first_day(period), |q, from| {
                q.filter(bank_transactions::Column::TransactionDate.gte(from))
            })
            .filter(bank_transactions::Column::TransactionDate.lte(last_day(period)))
            .all(&self.db)
            .await
            .map_err(read_failed("bank_transactions"))?;
        debug!(rows = rows.len(), "Read bank_transactions");
        Ok(rows
            .into_iter()
            .map(|t| BankTransaction {
                transaction_type: t.transaction_type,
                amount: t.amount,
                transaction_date: t.transaction_date,
                description: t.description,
                reference_number: t.reference_number,
            })
            .collect())
    }

    async fn paid_payroll(&self, period: Period) -> Result<Vec<PayrollEntry>, SourceError> {
        let rows = payroll::Entity::find()
            .filter(payroll::Column::Status.eq(PAID))
            .apply_if(lower_bound(period), |q, from| {
                q.filter(payroll::Column::PaidAt.gte(from))
            })
            .filter(payroll::Column::PaidAt.lt(period.to()))
            .all(&self.db)
            .await
            .map_err(read_failed("payroll"))?;
        debug!(rows = rows.len(), "Read paid payroll");
        Ok(rows.into_iter().map(payroll_entry).collect())
    }

    async fn pending_payroll(&self) -> Result<Vec<PayrollEntry>, SourceError> {
        let rows = payroll::Entity::find()
            .filter(payroll::Column::Status.eq(PENDING))
            .all(&self.db)
            .await
            .map_err(read_failed("payroll"))?;
        debug!(rows = rows.len(), "Read pending payroll");
        Ok(rows.into_iter().map(payroll_entry).collect())
    }

    async fn bank_accounts(&self) -> Result<Vec<BankAccount>, SourceError> {
        let rows = bank_accounts::Entity::find()
            .all(&self.db)
            .await
            .map_err(read_failed("bank_accounts"))?;
        Ok(rows
            .into_iter()
            .map(|a| BankAccount {
                current_balance: a.current_balance,
                is_active: a.is_active.unwrap_or(false),
            })
            .collect())
    }

    async fn customers(&self) -> Result<Vec<Customer>, SourceError> {
        let rows = customers::Entity::find()
            .all(&self.db)
            .await
            .map_err(read_failed("customers"))?;
        Ok(rows
            .into_iter()
            .map(|c| Customer {
                credit_balance: c.credit_balance,
            })
            .collect())
    }

    async fn creditors(&self) -> Result<Vec<Creditor>, SourceError> {
        let rows = creditors::Entity::find()
            .all(&self.db)
            .await
            .map_err(read_failed("creditors"))?;
        Ok(rows
            .into_iter()
            .map(|c| Creditor {
                outstanding_balance: c.outstanding_balance,
            })
            .collect())
    }

    async fn machines(&self) -> Result<Vec<Machine>, SourceError> {
        let rows = machines::Entity::find()
            .all(&self.db)
            .await
            .map_err(read_failed("machines"))?;
        Ok(rows
            .into_iter()
            .map(|m| Machine {
                purchase_cost: m.purchase_cost,
            })
            .collect())
    }

    async fn inventory_items(&self) -> Result<Vec<InventoryItem>, SourceError> {
        let rows = inventory::Entity::find()
            .all(&self.db)
            .await
            .map_err(read_failed("inventory"))?;
        debug!(rows = rows.len(), "Read inventory");
        Ok(rows
            .into_iter()
            .map(|i| InventoryItem {
                variant_id: VariantId::from_uuid(i.variant_id),
                quantity: i.quantity.map(i64::from),
                unit_cost: i.unit_cost,
            })
            .collect())
    }

    async fn raw_materials(&self) -> Result<Vec<RawMaterial>, SourceError> {
        let rows = raw_materials::Entity::find()
            .all(&self.db)
            .await
            .map_err(read_failed("raw_materials"))?;
        Ok(rows
            .into_iter()
            .map(|m| RawMaterial {
                quantity_in_stock: m.quantity_in_stock,
                unit_cost: m.unit_cost,
            })
            .collect())
    }

    async fn stock_events_after(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<StockEvent>, SourceError> {
        let lower = (cutoff != DateTime::<Utc>::MIN_UTC).then_some(cutoff);
        let rows = inventory_transactions::Entity::find()
            .apply_if(lower, |q, cutoff| {
                q.filter(inventory_transactions::Column::CreatedAt.gt(cutoff))
            })
            .all(&self.db)
            .await
            .map_err(read_failed("inventory_transactions"))?;
        debug!(rows = rows.len(), "Read inventory_transactions");
        Ok(rows
            .into_iter()
            .map(|t| StockEvent {
                variant_id: VariantId::from_uuid(t.variant_id),
                quantity_change: i64::from(t.quantity_change),
                occurred_at: t.created_at,
            })
            .collect())
    }
}

fn sales_order(row: sales_orders::Model) -> SalesOrder {
    SalesOrder {
        id: SalesOrderId::from_uuid(row.id),
        total_amount: row.total_amount,
        subtotal: row.subtotal,
        created_at: row.created_at,
    }
}

fn expense(row: expenses::Model) -> Expense {
    Expense {
        amount: row.amount,
        category: ExpenseCategory::parse(row.category.as_deref().unwrap_or_default()),
        is_manufacturing_cost: row.is_manufacturing_cost.unwrap_or(false),
        expense_date: row.expense_date,
    }
}

fn payroll_entry(row: payroll::Model) -> PayrollEntry {
    PayrollEntry {
        net_salary: row.net_salary,
        status: PayrollStatus::parse(&row.status),
        paid_at: row.paid_at,
    }
}

#[cfg(test)]
#[path = "ledger_source_tests.rs"]
mod tests;
