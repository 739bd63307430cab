//! Expense classification into purchases, manufacturing and general.

use chrono::NaiveDate;
use finrecon_shared::types::amount_or_zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::{BankTransaction, Expense, ExpenseCategory, LedgerRecord, Period};

/// Where an expense line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseSource {
    /// The expense ledger.
    Expense,
    /// A bank outflow.
    BankOutflow,
}

/// One outgoing amount, normalized from either ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    /// Source ledger.
    pub source: ExpenseSource,
    /// Category.
    pub category: ExpenseCategory,
    /// Amount, missing values as zero.
    pub amount: Decimal,
    /// Calendar date.
    pub date: NaiveDate,
    /// Manufacturing flag from the expense ledger.
    pub is_manufacturing_cost: bool,
}

impl ExpenseLine {
    /// Line for an expense ledger entry.
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            source: ExpenseSource::Expense,
            category: expense.category.clone(),
            amount: amount_or_zero(expense.amount),
            date: expense.expense_date,
            is_manufacturing_cost: expense.is_manufacturing_cost,
        }
    }

    /// Synthetic line for a bank outflow; inflows yield `None`.
    #[must_use]
    pub fn from_bank_transaction(transaction: &BankTransaction) -> Option<Self> {
        transaction.flow().is_outflow().then(|| Self {
            source: ExpenseSource::BankOutflow,
            category: ExpenseCategory::BankOutflow,
            amount: amount_or_zero(transaction.amount),
            date: transaction.transaction_date,
            is_manufacturing_cost: false,
        })
    }

    /// Line for a ledger record, if the record is an expense.
    #[must_use]
    pub fn from_record(record: &LedgerRecord) -> Option<Self> {
        match record {
            LedgerRecord::Expense(e) => Some(Self::from_expense(e)),
            LedgerRecord::BankTransaction(t) => Self::from_bank_transaction(t),
            LedgerRecord::SalesOrder(_)
            | LedgerRecord::Payment(_)
            | LedgerRecord::PayrollEntry(_)
            | LedgerRecord::CreditorTransaction(_) => {
                debug!(kind = record.kind(), "Skipping non-expense record");
                None
            }
        }
    }
}

/// Classification target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseBucket {
    /// Stock purchases, feeding COGS.
    Purchases,
    /// Manufacturing costs.
    Manufacturing,
    /// Everything else.
    General,
}

/// Expense lines split into disjoint buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePartition {
    /// Stock purchases.
    pub purchases: Vec<ExpenseLine>,
    /// Manufacturing costs.
    pub manufacturing: Vec<ExpenseLine>,
    /// General operating expenses.
    pub general: Vec<ExpenseLine>,
}

impl ExpensePartition {
    /// Total of the purchases bucket.
    #[must_use]
    pub fn purchases_total(&self) -> Decimal {
        sum(&self.purchases)
    }

    /// Total of the manufacturing bucket.
    #[must_use]
    pub fn manufacturing_total(&self) -> Decimal {
        sum(&self.manufacturing)
    }

    /// Total of the general bucket.
    #[must_use]
    pub fn general_total(&self) -> Decimal {
        sum(&self.general)
    }

    /// Number of lines across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.purchases.len() + self.manufacturing.len() + self.general.len()
    }

    /// Returns true if no line was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps only lines dated inside `period`.
    #[must_use]
    pub fn within(&self, period: Period) -> Self {
        let keep = |lines: &[ExpenseLine]| -> Vec<ExpenseLine> {
            lines
                .iter()
                .filter(|l| period.contains_date(l.date))
                .cloned()
                .collect()
        };
        Self {
            purchases: keep(&self.purchases),
            manufacturing: keep(&self.manufacturing),
            general: keep(&self.general),
        }
    }
}

fn sum(lines: &[ExpenseLine]) -> Decimal {
    lines.iter().map(|l| l.amount).sum()
}

/// Classifies expense lines.
pub struct ExpenseClassifier;

impl ExpenseClassifier {
    /// Expense ledger entries followed by synthetic bank outflow lines.
    #[must_use]
    pub fn expense_stream(
        expenses: &[Expense],
        bank_transactions: &[BankTransaction],
    ) -> Vec<ExpenseLine> {
        expenses
            .iter()
            .map(ExpenseLine::from_expense)
            .chain(
                bank_transactions
                    .iter()
                    .filter_map(ExpenseLine::from_bank_transaction),
            )
            .collect()
    }

    /// Bucket for one line. Rules apply in order: bank outflows are never
    /// purchases, purchase categories feed COGS, equipment or flagged lines
    /// are manufacturing, the rest is general.
    #[must_use]
    pub const fn bucket_for(line: &ExpenseLine) -> ExpenseBucket {
        if matches!(line.source, ExpenseSource::BankOutflow) {
            return ExpenseBucket::General;
        }
        if line.category.is_inventory_purchase() {
            return ExpenseBucket::Purchases;
        }
        if matches!(line.category, ExpenseCategory::Equipment) || line.is_manufacturing_cost {
            return ExpenseBucket::Manufacturing;
        }
        ExpenseBucket::General
    }

    /// Partitions the expense records; non-expense records are skipped.
    #[must_use]
    pub fn classify(records: &[LedgerRecord]) -> ExpensePartition {
        Self::classify_lines(records.iter().filter_map(ExpenseLine::from_record).collect())
    }

    /// Partitions already normalized lines.
    #[must_use]
    pub fn classify_lines(lines: Vec<ExpenseLine>) -> ExpensePartition {
        let mut partition = ExpensePartition::default();
        for line in lines {
            match Self::bucket_for(&line) {
                ExpenseBucket::Purchases => partition.purchases.push(line),
                ExpenseBucket::Manufacturing => partition.manufacturing.push(line),
                ExpenseBucket::General => partition.general.push(line),
            }
        }
        partition
    }
}
