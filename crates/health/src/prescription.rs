use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordkit_core::{Entity, RecordId, Repository};

use crate::patient::PatientId;

/// Prescription identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrescriptionId(pub RecordId);

impl PrescriptionId {
    pub const fn new(raw: u32) -> Self {
        Self(RecordId::new(raw))
    }
}

impl core::fmt::Display for PrescriptionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A medication prescribed to one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_id: PatientId,
    pub medication: String,
    pub issued_at: DateTime<Utc>,
}

impl Entity for Prescription {
    type Id = PrescriptionId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Prescriptions grouped by patient, derived from a repository.
///
/// The grouping is a wholesale snapshot. It is never maintained
/// incrementally: rebuild it after any repository mutation.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionIndex {
    by_patient: HashMap<PatientId, Vec<Prescription>>,
}

impl PrescriptionIndex {
    /// Rebuild the full grouping from every prescription in the repository.
    ///
    /// Within one patient, prescriptions keep repository insertion order.
    pub fn rebuild(prescriptions: &Repository<Prescription>) -> Self {
        let mut by_patient: HashMap<PatientId, Vec<Prescription>> = HashMap::new();
        for prescription in prescriptions.iter() {
            by_patient
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        Self { by_patient }
    }

    /// All prescriptions for one patient; empty when the patient has none.
    pub fn for_patient(&self, patient_id: PatientId) -> &[Prescription] {
        self.by_patient
            .get(&patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct patients holding at least one prescription.
    pub fn patient_count(&self) -> usize {
        self.by_patient.len()
    }
}
