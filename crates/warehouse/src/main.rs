use anyhow::Result;

use recordkit_core::{Entity, RepoError, Repository};
use recordkit_warehouse::{ElectronicItem, ItemId, WarehouseManager, increase_stock};

fn print_all<T: Entity + core::fmt::Display>(repo: &Repository<T>) {
    if repo.is_empty() {
        println!("No items found.");
        return;
    }
    for item in repo.iter() {
        println!("{item}");
    }
}

/// Kind-specific reporting; the run always continues.
fn report(err: &RepoError) {
    match err {
        RepoError::DuplicateKey(msg) => println!("Duplicate Error: {msg}"),
        RepoError::NotFound(msg) => println!("Not Found: {msg}"),
        RepoError::InvalidValue(msg) => println!("Invalid Quantity: {msg}"),
    }
}

fn main() -> Result<()> {
    recordkit_observability::init();

    let mut manager = WarehouseManager::new();
    println!("Seeding data...");
    manager.seed()?;

    println!("\n--- Grocery Items ---");
    print_all(manager.groceries());

    println!("\n--- Electronic Items ---");
    print_all(manager.electronics());

    println!("\n\n--- Testing Failure Scenarios ---");

    println!("\nAttempting to add duplicate electronic item (ID:1) ...");
    let tablet = ElectronicItem {
        id: ItemId::new(1),
        name: "Tablet".to_string(),
        quantity: 3,
        brand: "Apple".to_string(),
        warranty_months: 18,
    };
    if let Err(err) = manager.electronics_mut().add(tablet) {
        tracing::warn!(%err, "duplicate add rejected");
        report(&err);
    }

    println!("\nAttempting to remove non-existent electronic item (ID:999) ...");
    if let Err(err) = manager.electronics_mut().remove(ItemId::new(999)) {
        report(&err);
    }

    println!("\nAttempting to set negative quantity for electronic item (ID:2) ...");
    if let Err(err) = manager.electronics_mut().update_quantity(ItemId::new(2), -10) {
        report(&err);
    }

    println!("\nRestocking headphones (ID:3) ...");
    match increase_stock(manager.electronics_mut(), ItemId::new(3), 5) {
        Ok(change) => println!(
            "Increased stock for '{}' (ID: {}). New quantity: {}",
            change.name, change.id, change.new_quantity
        ),
        Err(err) => report(&err),
    }

    println!("\nRestocking unknown item (ID:999) ...");
    match increase_stock(manager.electronics_mut(), ItemId::new(999), 5) {
        Ok(change) => println!(
            "Increased stock for '{}' (ID: {}). New quantity: {}",
            change.name, change.id, change.new_quantity
        ),
        Err(err) => report(&err),
    }

    println!("\n--- Final Electronic Items ---");
    print_all(manager.electronics());

    println!("\n--- Final Grocery Items ---");
    print_all(manager.groceries());

    println!("\nProgram finished.");
    Ok(())
}
