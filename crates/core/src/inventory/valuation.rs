//! Stock value as of an arbitrary cutoff.

use chrono::{DateTime, Utc};
use finrecon_shared::types::amount_or_zero;
use rust_decimal::Decimal;

use super::snapshot::StockSnapshot;
use super::types::{InventoryItem, RawMaterial, StockEvent};

/// Current raw-material value: Σ `quantity_in_stock × unit_cost`.
#[must_use]
pub fn raw_material_value(materials: &[RawMaterial]) -> Decimal {
    materials
        .iter()
        .map(|m| amount_or_zero(m.quantity_in_stock) * amount_or_zero(m.unit_cost))
        .sum()
}

/// Reconstructs inventory value from current state and the event log.
///
/// Raw materials have no event log, so their current value is added to
/// every cutoff unchanged.
#[derive(Debug, Clone)]
pub struct StockValuation {
    current: StockSnapshot,
    events: Vec<StockEvent>,
    raw_material_value: Decimal,
}

impl StockValuation {
    /// Creates a valuation from an already built snapshot.
    #[must_use]
    pub const fn new(
        current: StockSnapshot,
        events: Vec<StockEvent>,
        raw_material_value: Decimal,
    ) -> Self {
        Self {
            current,
            events,
            raw_material_value,
        }
    }

    /// Creates a valuation from ledger rows.
    #[must_use]
    pub fn from_ledgers(
        items: &[InventoryItem],
        raw_materials: &[RawMaterial],
        events: Vec<StockEvent>,
    ) -> Self {
        Self::new(
            StockSnapshot::from_items(items),
            events,
            raw_material_value(raw_materials),
        )
    }

    /// The current finished-goods snapshot.
    #[must_use]
    pub const fn current(&self) -> &StockSnapshot {
        &self.current
    }

    /// The constant raw-material component.
    #[must_use]
    pub const fn raw_material_value(&self) -> Decimal {
        self.raw_material_value
    }

    /// Finished-goods stock as it stood at `cutoff`.
    #[must_use]
    pub fn snapshot_at(&self, cutoff: DateTime<Utc>) -> StockSnapshot {
        self.current.rewind(&self.events, cutoff)
    }

    /// Total inventory value at `cutoff`, raw materials included.
    #[must_use]
    pub fn value_at(&self, cutoff: DateTime<Utc>) -> Decimal {
        self.snapshot_at(cutoff).total_value() + self.raw_material_value
    }
}
