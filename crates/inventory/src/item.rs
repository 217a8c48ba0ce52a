use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordkit_core::{Entity, RecordId};

/// Inventory item identifier.
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

/// One logged stock record. Immutable once added: corrections are
/// modeled as remove-and-re-add, never in-place edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub added_at: DateTime<Utc>,
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
