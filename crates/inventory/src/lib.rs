//! Inventory logging module (immutable stock records).
//!
//! Pure domain data only; snapshot persistence lives in `recordkit-infra`.

pub mod item;

pub use item::{InventoryItem, ItemId};
