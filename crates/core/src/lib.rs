//! `recordkit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the entity contract, the repository error taxonomy, and the
//! typed keyed repository itself.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;

pub use entity::{Entity, Quantified};
pub use error::{RepoError, RepoResult};
pub use id::RecordId;
pub use repository::Repository;
