//! Health records module (patients, prescriptions, derived lookups).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod patient;
pub mod prescription;

pub use patient::{Patient, PatientId};
pub use prescription::{Prescription, PrescriptionId, PrescriptionIndex};
