//! Typed keyed repository: an insertion-ordered, id-unique entity store.

use std::collections::HashMap;

use crate::entity::{Entity, Quantified};
use crate::error::{RepoError, RepoResult};

/// In-memory store of entities keyed by their unique id.
///
/// Entries keep insertion order (snapshots and enumeration are order-stable),
/// while point lookups go through an id → position index. The store is
/// single-owner and not safe for concurrent mutation; callers that must share
/// it across threads serialize access externally.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Entity> Repository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` under its id.
    ///
    /// A duplicate id is rejected with `DuplicateKey` and the stored entity
    /// is left untouched.
    pub fn add(&mut self, entity: T) -> RepoResult<()> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(RepoError::duplicate_key(id));
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(entity);
        Ok(())
    }

    /// Look up the entity stored under `id`.
    pub fn get(&self, id: T::Id) -> RepoResult<&T> {
        self.index
            .get(&id)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| RepoError::not_found(id))
    }

    /// Delete and return the entity stored under `id`.
    ///
    /// The id becomes free for reuse; the remaining entries keep their
    /// relative order.
    pub fn remove(&mut self, id: T::Id) -> RepoResult<T> {
        let pos = self
            .index
            .remove(&id)
            .ok_or_else(|| RepoError::not_found(id))?;
        let removed = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Snapshot of all entities in insertion order.
    ///
    /// The returned vector owns clones; mutating it cannot touch the store.
    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.clone()
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// First entity satisfying `predicate`, in insertion order.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.entries.iter().find(|entity| predicate(entity))
    }

    /// Whether an entity is stored under `id`.
    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Entity + Quantified> Repository<T> {
    /// Set the quantity of the entity stored under `id`.
    ///
    /// Value validation runs before the existence check: a negative quantity
    /// reports `InvalidValue` even when `id` is absent. On success only the
    /// quantity changes.
    pub fn update_quantity(&mut self, id: T::Id, new_quantity: i64) -> RepoResult<()> {
        if new_quantity < 0 {
            return Err(RepoError::invalid_value(format!(
                "quantity cannot be negative (got {new_quantity} for id {id})"
            )));
        }
        let pos = *self
            .index
            .get(&id)
            .ok_or_else(|| RepoError::not_found(id))?;
        self.entries[pos].set_quantity(new_quantity);
        Ok(())
    }
}
