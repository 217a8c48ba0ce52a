use anyhow::Result;
use chrono::{Duration, Utc};

use recordkit_core::{RepoResult, Repository};
use recordkit_health::{Patient, PatientId, Prescription, PrescriptionId, PrescriptionIndex};

fn seed(
    patients: &mut Repository<Patient>,
    prescriptions: &mut Repository<Prescription>,
) -> RepoResult<()> {
    let register = |id: u32, name: &str, age: u32, gender: &str| Patient {
        id: PatientId::new(id),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
    };
    patients.add(register(1, "Alice Johnson", 34, "Female"))?;
    patients.add(register(2, "Brian Mensah", 45, "Male"))?;
    patients.add(register(3, "Clara Osei", 29, "Female"))?;

    let issue = |id: u32, patient: u32, medication: &str, days_ago: i64| Prescription {
        id: PrescriptionId::new(id),
        patient_id: PatientId::new(patient),
        medication: medication.to_string(),
        issued_at: Utc::now() - Duration::days(days_ago),
    };
    prescriptions.add(issue(101, 1, "Amoxicillin", 30))?;
    prescriptions.add(issue(102, 2, "Lisinopril", 21))?;
    prescriptions.add(issue(103, 1, "Ibuprofen", 14))?;
    prescriptions.add(issue(104, 3, "Metformin", 7))?;
    prescriptions.add(issue(105, 2, "Atorvastatin", 2))?;

    Ok(())
}

fn print_patient(patient: &Patient, index: &PrescriptionIndex) {
    println!(
        "{} (id {}), {} years, {}",
        patient.name, patient.id, patient.age, patient.gender
    );
    let scripts = index.for_patient(patient.id);
    if scripts.is_empty() {
        println!("  no prescriptions on file");
    }
    for prescription in scripts {
        println!(
            "  #{} {} issued {}",
            prescription.id,
            prescription.medication,
            prescription.issued_at.format("%Y-%m-%d")
        );
    }
}

fn main() -> Result<()> {
    recordkit_observability::init();

    let mut patients: Repository<Patient> = Repository::new();
    let mut prescriptions: Repository<Prescription> = Repository::new();
    seed(&mut patients, &mut prescriptions)?;
    tracing::info!(
        patients = patients.len(),
        prescriptions = prescriptions.len(),
        "seeded health records"
    );

    let index = PrescriptionIndex::rebuild(&prescriptions);

    println!("--- Patients and their prescriptions ---");
    for patient in patients.iter() {
        print_patient(patient, &index);
    }

    // A lookup that misses is reported and the program moves on.
    println!();
    match patients.get(PatientId::new(999)) {
        Ok(patient) => println!("Found patient: {}", patient.name),
        Err(err) => println!("Lookup failed: {err}"),
    }

    match patients.find(|patient| patient.name == "Brian Mensah") {
        Some(patient) => println!("Search by name found id {}: {}", patient.id, patient.name),
        None => println!("Search by name found nobody."),
    }

    // The index is a snapshot; after a mutation it must be rebuilt.
    let removed = prescriptions.remove(PrescriptionId::new(103))?;
    println!("\nRemoved prescription #{} ({})", removed.id, removed.medication);
    let index = PrescriptionIndex::rebuild(&prescriptions);
    for patient in patients.iter() {
        print_patient(patient, &index);
    }

    Ok(())
}
