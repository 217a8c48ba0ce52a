//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Base record identifier: a plain integer key, unique within one repository.
///
/// Domain crates wrap this in their own newtypes (`PatientId`, `ItemId`, ...)
/// so ids from different collections cannot be mixed up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for RecordId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<RecordId> for u32 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}
