//! `SeaORM` entities for the ledgers read by the reporting engine.
//!
//! The schema is owned by the operational system; these entities only
//! mirror the columns reports need.

pub mod bank_accounts;
pub mod bank_transactions;
pub mod creditors;
pub mod customers;
pub mod expenses;
pub mod inventory;
pub mod inventory_transactions;
pub mod machines;
pub mod payments;
pub mod payroll;
pub mod raw_materials;
pub mod sales_orders;
