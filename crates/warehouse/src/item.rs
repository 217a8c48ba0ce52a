use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkit_core::{Entity, Quantified, RecordId};

/// Warehouse item identifier, shared by every stock kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub RecordId);

impl ItemId {
    pub const fn new(raw: u32) -> Self {
        Self(RecordId::new(raw))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Stocked goods: repository-keyed, countable, named.
pub trait StockItem: Entity<Id = ItemId> + Quantified {
    fn name(&self) -> &str;
}

/// An electronic product with brand and warranty metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl Entity for ElectronicItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Quantified for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl StockItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Electronic] ID:{} Name:{} Brand:{} Qty:{} Warranty:{}mo",
            self.id, self.name, self.brand, self.quantity, self.warranty_months
        )
    }
}

/// A perishable grocery line with an expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub expires_on: NaiveDate,
}

impl Entity for GroceryItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Quantified for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl StockItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Grocery] ID:{} Name:{} Qty:{} Expiry:{}",
            self.id, self.name, self.quantity, self.expires_on
        )
    }
}
