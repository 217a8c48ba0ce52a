use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Run the logger binary against `path`, same entry point as prod.
fn run_logger(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recordkit-inventory"))
        .env("RECORDKIT_INVENTORY_FILE", path)
        .output()
        .expect("failed to run the inventory logger")
}

#[test]
fn demo_round_trips_the_seeded_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let output = run_logger(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Id: 1, Name: Nails, Quantity: 500"));
    assert!(stdout.contains("Id: 5, Name: Drill, Quantity: 20"));
    assert!(path.exists());
}

#[test]
fn unreadable_path_is_reported_and_the_run_continues_empty() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    // A path under a regular file can be neither written nor read.
    let output = run_logger(&blocker.join("inventory.json"));

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Error saving file:"));
    assert!(stdout.contains("Error loading file:"));
    assert!(stdout.contains("No items found."));
}
