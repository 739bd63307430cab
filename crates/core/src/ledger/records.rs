//! Ledger row projections.

use chrono::{DateTime, NaiveDate, Utc};
use finrecon_shared::types::{SalesOrderId, amount_or_zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::{BankFlow, ExpenseCategory};
use super::period::midnight_utc;

/// A sales order, recognized as revenue when created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrder {
    /// Order ID.
    pub id: SalesOrderId,
    /// Order total including taxes and discounts.
    pub total_amount: Option<Decimal>,
    /// Order subtotal.
    pub subtotal: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Cash received against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount received.
    pub amount: Option<Decimal>,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}

/// An entry in the expense ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent.
    pub amount: Option<Decimal>,
    /// Parsed category label.
    pub category: ExpenseCategory,
    /// Flagged as a manufacturing cost by the user.
    pub is_manufacturing_cost: bool,
    /// Calendar date of the expense.
    pub expense_date: NaiveDate,
}

/// A movement on a bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Free-form type, e.g. "credit", "debit", "withdrawal".
    pub transaction_type: String,
    /// Movement amount.
    pub amount: Option<Decimal>,
    /// Calendar date of the movement.
    pub transaction_date: NaiveDate,
    /// Description.
    pub description: Option<String>,
    /// Bank reference.
    pub reference_number: Option<String>,
}

impl BankTransaction {
    /// Direction of the movement.
    #[must_use]
    pub fn flow(&self) -> BankFlow {
        BankFlow::of(&self.transaction_type)
    }
}

/// Payroll entry status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollStatus {
    /// Salary paid out.
    Paid,
    /// Salary owed.
    Pending,
    /// Any other status (draft, cancelled, ...).
    Other(String),
}

impl PayrollStatus {
    /// Parses a stored status, case-insensitively.
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "paid" => Self::Paid,
            "pending" => Self::Pending,
            _ => Self::Other(status.to_string()),
        }
    }
}

/// A payroll run line for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Net salary.
    pub net_salary: Option<Decimal>,
    /// Status.
    pub status: PayrollStatus,
    /// When it was paid, if it was.
    pub paid_at: Option<DateTime<Utc>>,
}

/// A bank account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Current balance.
    pub current_balance: Option<Decimal>,
    /// Whether the account is active.
    pub is_active: bool,
}

/// A customer with an outstanding credit balance (receivable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Amount owed to us.
    pub credit_balance: Option<Decimal>,
}

/// A creditor with an outstanding balance (payable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creditor {
    /// Amount we owe.
    pub outstanding_balance: Option<Decimal>,
}

/// A machine carried as a fixed asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Acquisition cost.
    pub purchase_cost: Option<Decimal>,
}

/// A movement on a creditor's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditorTransaction {
    /// Free-form type.
    pub transaction_type: String,
    /// Amount.
    pub amount: Option<Decimal>,
    /// Calendar date.
    pub transaction_date: NaiveDate,
}

/// Any dated ledger row that may feed a profit and loss bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerRecord {
    /// Revenue.
    SalesOrder(SalesOrder),
    /// Cash receipt.
    Payment(Payment),
    /// Expense ledger entry.
    Expense(Expense),
    /// Bank movement.
    BankTransaction(BankTransaction),
    /// Payroll line.
    PayrollEntry(PayrollEntry),
    /// Creditor account movement.
    CreditorTransaction(CreditorTransaction),
}

impl LedgerRecord {
    /// Monetary amount, with missing values as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        amount_or_zero(match self {
            Self::SalesOrder(o) => o.total_amount,
            Self::Payment(p) => p.amount,
            Self::Expense(e) => e.amount,
            Self::BankTransaction(t) => t.amount,
            Self::PayrollEntry(p) => p.net_salary,
            Self::CreditorTransaction(t) => t.amount,
        })
    }

    /// Instant the record takes effect. Unpaid payroll has none.
    #[must_use]
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::SalesOrder(o) => Some(o.created_at),
            Self::Payment(p) => Some(p.created_at),
            Self::Expense(e) => Some(midnight_utc(e.expense_date)),
            Self::BankTransaction(t) => Some(midnight_utc(t.transaction_date)),
            Self::PayrollEntry(p) => p.paid_at,
            Self::CreditorTransaction(t) => Some(midnight_utc(t.transaction_date)),
        }
    }

    /// Short discriminator naming the source ledger, used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SalesOrder(_) => "sales_order",
            Self::Payment(_) => "payment",
            Self::Expense(_) => "expense",
            Self::BankTransaction(_) => "bank_transaction",
            Self::PayrollEntry(_) => "payroll",
            Self::CreditorTransaction(_) => "creditor_transaction",
        }
    }
}
