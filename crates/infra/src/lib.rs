//! Infrastructure layer: file persistence for repositories.

pub mod snapshot;

pub use snapshot::{load_snapshot, save_snapshot, SnapshotError};
