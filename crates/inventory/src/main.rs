use anyhow::Result;
use chrono::{Duration, Utc};

use recordkit_core::{RepoResult, Repository};
use recordkit_infra::{load_snapshot, save_snapshot};
use recordkit_inventory::{InventoryItem, ItemId};

fn seed(catalog: &mut Repository<InventoryItem>) -> RepoResult<()> {
    let logged = |id: u32, name: &str, quantity: i64, days_ago: i64| InventoryItem {
        id: ItemId::new(id),
        name: name.to_string(),
        quantity,
        added_at: Utc::now() - Duration::days(days_ago),
    };
    catalog.add(logged(1, "Nails", 500, 10))?;
    catalog.add(logged(2, "Saw", 20, 5))?;
    catalog.add(logged(3, "Screwdriver", 80, 8))?;
    catalog.add(logged(4, "Hammer", 40, 15))?;
    catalog.add(logged(5, "Drill", 20, 12))?;
    Ok(())
}

fn print_all(catalog: &Repository<InventoryItem>) {
    if catalog.is_empty() {
        println!("No items found.");
        return;
    }
    for item in catalog.iter() {
        println!(
            "Id: {}, Name: {}, Quantity: {}, Date Added: {}",
            item.id,
            item.name,
            item.quantity,
            item.added_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn main() -> Result<()> {
    recordkit_observability::init();

    let path = std::env::var("RECORDKIT_INVENTORY_FILE").unwrap_or_else(|_| {
        tracing::debug!("RECORDKIT_INVENTORY_FILE not set; using inventory.json");
        "inventory.json".to_string()
    });

    let mut catalog: Repository<InventoryItem> = Repository::new();
    seed(&mut catalog)?;

    // A failed save loses only this save; the run continues either way.
    match save_snapshot(&catalog, &path) {
        Ok(()) => {
            tracing::info!(items = catalog.len(), path = %path, "inventory snapshot saved");
        }
        Err(err) => {
            tracing::error!(%err, path = %path, "saving inventory snapshot failed");
            println!("Error saving file: {err}");
        }
    }

    // Simulate a new session: drop the in-memory log and reload from disk.
    drop(catalog);
    // Any load failure falls back to an empty log; the demo still prints.
    let restored = match load_snapshot::<InventoryItem, _>(&path) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(%err, path = %path, "snapshot unreadable; starting with empty log");
            println!("Error loading file: {err}");
            Repository::new()
        }
    };

    print_all(&restored);
    Ok(())
}
