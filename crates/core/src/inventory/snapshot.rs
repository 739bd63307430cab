//! Immutable per-variant stock snapshots.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use finrecon_shared::types::{VariantId, extended_value};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::types::{InventoryItem, StockEvent};

/// Quantity and unit cost of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPosition {
    /// Units on hand. May be negative after a rewind.
    pub quantity: i64,
    /// Cost per unit.
    pub unit_cost: Option<Decimal>,
}

impl StockPosition {
    /// `quantity × unit_cost`, zero when the cost is unknown.
    #[must_use]
    pub fn value(&self) -> Decimal {
        extended_value(self.quantity, self.unit_cost)
    }
}

/// Stock positions keyed by variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    positions: BTreeMap<VariantId, StockPosition>,
}

impl StockSnapshot {
    /// Builds a snapshot from current inventory rows.
    ///
    /// Rows for the same variant are summed. The first non-null unit cost
    /// seen for a variant is kept.
    #[must_use]
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let mut positions: BTreeMap<VariantId, StockPosition> = BTreeMap::new();
        for item in items {
            let quantity = item.quantity.unwrap_or(0);
            positions
                .entry(item.variant_id)
                .and_modify(|p| {
                    p.quantity = p.quantity.saturating_add(quantity);
                    p.unit_cost = p.unit_cost.or(item.unit_cost);
                })
                .or_insert(StockPosition {
                    quantity,
                    unit_cost: item.unit_cost,
                });
        }
        Self { positions }
    }

    /// Position for a variant, if it is stocked.
    #[must_use]
    pub fn get(&self, variant_id: &VariantId) -> Option<&StockPosition> {
        self.positions.get(variant_id)
    }

    /// All positions in variant order.
    pub fn positions(&self) -> impl Iterator<Item = (&VariantId, &StockPosition)> {
        self.positions.iter()
    }

    /// Number of stocked variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is stocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Σ `quantity × unit_cost` over all positions.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.positions.values().map(StockPosition::value).sum()
    }

    /// Returns the snapshot as it stood at `cutoff`.
    ///
    /// Every event with `occurred_at > cutoff` is undone. Unit costs are
    /// untouched and the order of `events` is irrelevant. Events for
    /// variants not in the snapshot are dropped.
    #[must_use]
    pub fn rewind(&self, events: &[StockEvent], cutoff: DateTime<Utc>) -> Self {
        let mut positions = self.positions.clone();
        let mut dropped = 0usize;

        for event in events.iter().filter(|e| e.occurred_at > cutoff) {
            match positions.get_mut(&event.variant_id) {
                Some(position) => {
                    position.quantity = position.quantity.saturating_sub(event.quantity_change);
                }
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(dropped, %cutoff, "Ignored stock events for unknown variants");
        }

        for (variant_id, position) in &positions {
            if position.quantity < 0 {
                warn!(
                    %variant_id,
                    quantity = position.quantity,
                    %cutoff,
                    "Reconstructed stock is negative, event log may be incomplete"
                );
            }
        }

        Self { positions }
    }
}
