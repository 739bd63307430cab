//! Core business logic for Finrecon.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Ledger rows come in through the [`reports::LedgerSource`] trait; everything
//! after the fetch is deterministic computation.
//!
//! # Modules
//!
//! - `ledger` - Ledger row types, reporting periods and expense categories
//! - `inventory` - Point-in-time stock valuation by replaying quantity changes
//! - `reports` - Profit and loss, balance sheet, category and cash reports

pub mod inventory;
pub mod ledger;
pub mod reports;
