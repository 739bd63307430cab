//! Financial report generation.
//!
//! This module derives, for an arbitrary date range:
//! - Profit and loss (accrual revenue, periodic-method COGS, operating expenses)
//! - Balance sheet as of now
//! - Expense breakdown by category
//! - Cash-basis summary

pub mod balance_sheet;
pub mod cash;
pub mod categories;
pub mod classifier;
pub mod error;
pub mod generator;
pub mod profit_loss;
pub mod service;
pub mod source;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use balance_sheet::{BalanceSheetAssembler, BalanceSheetInputs};
pub use categories::CategoryAggregator;
pub use classifier::{
    ExpenseBucket, ExpenseClassifier, ExpenseLine, ExpensePartition, ExpenseSource,
};
pub use error::{ReportError, SourceError};
pub use generator::ReportGenerator;
pub use profit_loss::ProfitLossAssembler;
pub use service::ReportService;
pub use source::{LedgerSource, SourceData};
pub use types::*;
