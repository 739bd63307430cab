//! Report error types.

use finrecon_shared::AppError;
use thiserror::Error;

use crate::ledger::InvalidPeriod;

/// A ledger could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to read {ledger} ledger: {message}")]
pub struct SourceError {
    /// Name of the ledger that failed, e.g. "sales_orders".
    pub ledger: &'static str,
    /// Underlying failure.
    pub message: String,
}

impl SourceError {
    /// Wraps any displayable failure for the named ledger.
    pub fn new(ledger: &'static str, err: impl std::fmt::Display) -> Self {
        Self {
            ledger,
            message: err.to_string(),
        }
    }
}

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested period is reversed.
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),

    /// A ledger read failed; no partial report is produced.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidPeriod(e) => Self::Validation(e.to_string()),
            ReportError::Source(e) => Self::Database(e.to_string()),
        }
    }
}
