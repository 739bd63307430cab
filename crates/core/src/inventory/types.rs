//! Stock ledger rows.

use chrono::{DateTime, Utc};
use finrecon_shared::types::VariantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current finished-goods stock for one variant at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Product variant.
    pub variant_id: VariantId,
    /// Units on hand.
    pub quantity: Option<i64>,
    /// Cost per unit.
    pub unit_cost: Option<Decimal>,
}

/// Current raw-material stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// Quantity in stock, possibly fractional (kg, m, ...).
    pub quantity_in_stock: Option<Decimal>,
    /// Cost per unit.
    pub unit_cost: Option<Decimal>,
}

/// A recorded change in a variant's stock quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEvent {
    /// Product variant.
    pub variant_id: VariantId,
    /// Signed change, positive for stock in.
    pub quantity_change: i64,
    /// When the change happened.
    pub occurred_at: DateTime<Utc>,
}
