use chrono::{Duration, Utc};

use recordkit_core::{RepoError, RepoResult, Repository};

use crate::item::{ElectronicItem, GroceryItem, ItemId, StockItem};

/// Receipt for a successful stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub id: ItemId,
    pub name: String,
    pub new_quantity: i64,
}

/// Owns one repository per stock kind.
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock a few items of each kind.
    pub fn seed(&mut self) -> RepoResult<()> {
        let electronic = |id: u32, name: &str, quantity: i64, brand: &str, months: u32| {
            ElectronicItem {
                id: ItemId::new(id),
                name: name.to_string(),
                quantity,
                brand: brand.to_string(),
                warranty_months: months,
            }
        };
        self.electronics.add(electronic(1, "Laptop", 5, "HP", 24))?;
        self.electronics.add(electronic(2, "Smartphone", 10, "Samsung", 12))?;
        self.electronics.add(electronic(3, "Headphones", 15, "JBL", 6))?;

        let today = Utc::now().date_naive();
        let grocery = |id: u32, name: &str, quantity: i64, days_ahead: i64| GroceryItem {
            id: ItemId::new(id),
            name: name.to_string(),
            quantity,
            expires_on: today + Duration::days(days_ahead),
        };
        self.groceries.add(grocery(101, "Butter", 50, 10))?;
        self.groceries.add(grocery(102, "Milk", 30, 5))?;
        self.groceries.add(grocery(103, "Bread", 20, 3))?;

        Ok(())
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }
}

/// Add `amount` to an item's stock, returning the adjustment receipt.
///
/// A negative `amount` draws stock down; driving the level below zero is
/// refused by the repository's quantity check. An adjustment that overflows
/// the quantity range is refused the same way.
pub fn increase_stock<T: StockItem>(
    repo: &mut Repository<T>,
    id: ItemId,
    amount: i64,
) -> RepoResult<StockChange> {
    let item = repo.get(id)?;
    let new_quantity = item.quantity().checked_add(amount).ok_or_else(|| {
        RepoError::invalid_value(format!("stock adjustment overflows for id {id}"))
    })?;
    let name = item.name().to_string();

    repo.update_quantity(id, new_quantity)?;
    Ok(StockChange {
        id,
        name,
        new_quantity,
    })
}
