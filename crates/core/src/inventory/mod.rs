//! Point-in-time stock valuation.
//!
//! Only the current stock state is stored. Stock as of a past cutoff is
//! recovered by undoing every quantity change recorded after the cutoff.

pub mod snapshot;
pub mod types;
pub mod valuation;


pub use snapshot::{StockPosition, StockSnapshot};
pub use types::{InventoryItem, RawMaterial, StockEvent};
pub use valuation::{StockValuation, raw_material_value};
