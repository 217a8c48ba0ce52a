//! Warehouse stock module (electronics, groceries, stock adjustments).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod item;
pub mod manager;

pub use item::{ElectronicItem, GroceryItem, ItemId, StockItem};
pub use manager::{StockChange, WarehouseManager, increase_stock};
