//! Whole-repository JSON snapshots.
//!
//! A snapshot is the full ordered entity sequence of one repository, written
//! as an indented JSON array. Loading rebuilds a fresh repository through its
//! own `add` path, so a file that violates the id-uniqueness contract is
//! rejected rather than half-applied. This module never prints or logs;
//! callers own presentation.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use recordkit_core::{Entity, RepoError, Repository};

/// Snapshot persistence failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened, read or written.
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not decode as the expected entity sequence.
    #[error("snapshot parse: {0}")]
    Parse(#[source] serde_json::Error),

    /// The decoded sequence violates the repository contract (repeated id).
    #[error("snapshot integrity: {0}")]
    Integrity(#[from] RepoError),
}

/// Write the full ordered entity sequence of `repo` to `path` as indented
/// JSON, overwriting any existing file.
///
/// The in-memory repository is unaffected whether or not the write succeeds.
pub fn save_snapshot<T, P>(repo: &Repository<T>, path: P) -> Result<(), SnapshotError>
where
    T: Entity + Serialize,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let entries: Vec<&T> = repo.iter().collect();
    serde_json::to_writer_pretty(&mut writer, &entries)
        .map_err(|err| SnapshotError::Io(err.into()))?;
    writer.flush()?;
    Ok(())
}

/// Read `path` back into a fresh repository.
///
/// A missing file yields an empty repository, not an error. A file that
/// cannot be decoded (or that repeats an id) yields an error and **no**
/// repository value, so a partially populated load is unrepresentable;
/// callers fall back to an explicitly empty repository if they want to
/// continue.
pub fn load_snapshot<T, P>(path: P) -> Result<Repository<T>, SnapshotError>
where
    T: Entity + DeserializeOwned,
    P: AsRef<Path>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Repository::new()),
        Err(err) => return Err(SnapshotError::Io(err)),
    };

    let entries: Vec<T> = serde_json::from_reader(BufReader::new(file)).map_err(|err| {
        if err.is_io() {
            SnapshotError::Io(err.into())
        } else {
            SnapshotError::Parse(err)
        }
    })?;

    let mut repo = Repository::new();
    for entity in entries {
        repo.add(entity)?;
    }
    Ok(repo)
}
