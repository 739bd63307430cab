//! Expense categories and bank movement direction.
//!
//! Free-form labels from the expense ledger are parsed once at the boundary
//! into [`ExpenseCategory`]; classification then matches on the enum.

use serde::{Deserialize, Serialize};

/// Label given to expenses without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Closed set of expense categories the reports know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// "Inventory Purchase"
    InventoryPurchase,
    /// "Stock Purchase"
    StockPurchase,
    /// "Raw Materials"
    RawMaterials,
    /// "Inventory"
    Inventory,
    /// "Equipment"
    Equipment,
    /// Synthetic category for bank outflows.
    BankOutflow,
    /// Any other label, kept verbatim.
    Unclassified(String),
}

impl ExpenseCategory {
    /// Parses a ledger label. Matching is exact; anything else is unclassified.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Inventory Purchase" => Self::InventoryPurchase,
            "Stock Purchase" => Self::StockPurchase,
            "Raw Materials" => Self::RawMaterials,
            "Inventory" => Self::Inventory,
            "Equipment" => Self::Equipment,
            "Bank Outflow" => Self::BankOutflow,
            other => Self::Unclassified(other.to_string()),
        }
    }

    /// Display label; an empty unclassified label reads as "Uncategorized".
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::InventoryPurchase => "Inventory Purchase",
            Self::StockPurchase => "Stock Purchase",
            Self::RawMaterials => "Raw Materials",
            Self::Inventory => "Inventory",
            Self::Equipment => "Equipment",
            Self::BankOutflow => "Bank Outflow",
            Self::Unclassified(label) if label.trim().is_empty() => UNCATEGORIZED,
            Self::Unclassified(label) => label,
        }
    }

    /// Returns true for categories that buy stock and so feed COGS.
    #[must_use]
    pub const fn is_inventory_purchase(&self) -> bool {
        matches!(
            self,
            Self::InventoryPurchase | Self::StockPurchase | Self::RawMaterials | Self::Inventory
        )
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a bank movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankFlow {
    /// Money coming in.
    Inflow,
    /// Money going out.
    Outflow,
}

impl BankFlow {
    const INFLOW_MARKERS: [&'static str; 3] = ["credit", "deposit", "receive"];

    /// Classifies a transaction type. Anything not naming an inflow is an outflow.
    #[must_use]
    pub fn of(transaction_type: &str) -> Self {
        let lowered = transaction_type.to_lowercase();
        if Self::INFLOW_MARKERS.iter().any(|m| lowered.contains(m)) {
            Self::Inflow
        } else {
            Self::Outflow
        }
    }

    /// Returns true for outflows.
    #[must_use]
    pub const fn is_outflow(self) -> bool {
        matches!(self, Self::Outflow)
    }
}
