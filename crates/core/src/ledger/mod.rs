//! Ledger rows consumed by the reporting engine.
//!
//! Every type here is a read-only projection of a row owned by another
//! subsystem (sales, payroll, banking, purchasing). Nullable numeric columns
//! stay `Option<Decimal>` and are coerced to zero only when summed.

pub mod category;
pub mod period;
pub mod records;

pub use category::{BankFlow, ExpenseCategory};
pub use period::{InvalidPeriod, Period, PeriodRequest};
pub use records::{
    BankAccount, BankTransaction, Creditor, CreditorTransaction, Customer, Expense, LedgerRecord,
    Machine, Payment, PayrollEntry, PayrollStatus, SalesOrder,
};
