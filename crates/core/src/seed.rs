//! Demo dataset loading.
//!
//! The demo frontend and the test QR flows assume two known patients with a
//! spread of vitals, labs and history entries. Seeding is idempotent: a store
//! that already holds any patient is left untouched.

use epr_health_id::HealthId;

use crate::error::PatientResult;
use crate::store::{NewPatient, NewReport, Store};

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The demo dataset was inserted into an empty store.
    Seeded,
    /// The store already held patients; nothing was changed.
    AlreadySeeded,
}

impl Store {
    /// Loads the demo dataset unless the store already holds any patient.
    pub fn seed_demo_data(&self) -> PatientResult<SeedOutcome> {
        if self.count_patients()? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let arjun = self.insert_patient(&NewPatient {
            health_id: HealthId::parse("1234-5675-9877-98")?,
            name: "Arjun Kumar".into(),
            blood_group: "B+".into(),
            allergies: "Peanuts, Dust".into(),
            emergency_contact: "9876543210".into(),
            current_medications: "Metformin 500mg daily".into(),
            conditions: "Type 2 Diabetes, Hypertension".into(),
        })?;

        let ravi = self.insert_patient(&NewPatient {
            health_id: HealthId::parse("6789-0854-8484-85")?,
            name: "Ravi Singh".into(),
            blood_group: "O+".into(),
            allergies: "None known".into(),
            emergency_contact: "9123456780".into(),
            current_medications: "Aspirin 81mg daily".into(),
            conditions: "High cholesterol".into(),
        })?;

        let reports = [
            (arjun, "vitals", "Blood Pressure", "130/85 mmHg", "2025-01-15"),
            (arjun, "vitals", "Heart Rate", "72 bpm", "2025-01-15"),
            (arjun, "labs", "Blood Glucose", "145 mg/dL", "2025-01-10"),
            (arjun, "labs", "HbA1c", "6.8%", "2025-01-10"),
            (arjun, "labs", "Cholesterol", "210 mg/dL", "2025-01-10"),
            (arjun, "history", "Past Surgeries", "Appendectomy (2015)", "2015-06-20"),
            (ravi, "vitals", "Blood Pressure", "120/80 mmHg", "2025-01-12"),
            (ravi, "labs", "Cholesterol", "240 mg/dL", "2025-01-08"),
            (ravi, "labs", "LDL", "160 mg/dL", "2025-01-08"),
            (ravi, "history", "Allergies", "No known allergies", "2024-12-01"),
        ];

        for (patient_id, section, title, value, date) in reports {
            self.insert_report(&NewReport {
                patient_id,
                section: section.into(),
                title: title.into(),
                value: value.into(),
                date: date.into(),
            })?;
        }

        tracing::info!("seeded demo dataset");
        Ok(SeedOutcome::Seeded)
    }
}
