use serde::{Deserialize, Serialize};

use recordkit_core::{Entity, RecordId};

/// Patient identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub RecordId);

impl PatientId {
    pub const fn new(raw: u32) -> Self {
        Self(RecordId::new(raw))
    }
}

impl core::fmt::Display for PatientId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String, // e.g. "Female"
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
