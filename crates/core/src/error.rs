//! Repository error model.

use thiserror::Error;

/// Result type used across the repository layer.
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error.
///
/// Exactly the three expected failure kinds of the keyed store. These are
/// routine, recoverable conditions; callers match on the kind and decide the
/// user-visible reaction. The enum is closed, so matches stay exhaustive and
/// no kind can be masked by a catch-all arm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Insertion with an id already present.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Lookup, removal or update referencing an absent id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A value failed a domain constraint (e.g. negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl RepoError {
    pub fn duplicate_key(id: impl core::fmt::Display) -> Self {
        Self::DuplicateKey(format!("entity with id {id} already exists"))
    }

    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(format!("entity with id {id} not found"))
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}
