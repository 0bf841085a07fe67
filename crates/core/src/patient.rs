//! Patient service and related types.
//!
//! This module provides the main service for patient operations: emergency
//! view assembly, record listing, and demo seeding.

use epr_health_id::HealthId;

use crate::error::PatientResult;
use crate::seed::SeedOutcome;
use crate::store::{Patient, Report, Store};
use crate::summary::generate_summary;

/// Everything the emergency card shows for one patient.
#[derive(Debug, Clone)]
pub struct EmergencyView {
    pub health_id: HealthId,
    pub name: String,
    pub blood_group: String,
    pub allergies: String,
    pub emergency_contact: String,
    pub current_medications: String,
    pub conditions: String,
    /// Generated summary of the fields above plus recent report entries.
    pub summary: String,
}

/// Pure patient data operations - no API concerns
#[derive(Clone)]
pub struct PatientService {
    store: Store,
}

impl PatientService {
    /// Creates a new instance of PatientService backed by the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Assembles the emergency view for a patient.
    ///
    /// Looks the patient up, gathers the most recent report entries, builds
    /// the labelled medical-context block, and runs the summary generator
    /// over it. Returns `Ok(None)` when no patient holds the given ID.
    pub fn emergency_view(&self, health_id: &HealthId) -> PatientResult<Option<EmergencyView>> {
        let patient = match self.store.find_by_health_id(health_id)? {
            Some(patient) => patient,
            None => return Ok(None),
        };

        let recent = self.store.recent_reports(patient.id)?;
        let context = medical_context(&patient, &recent);
        let summary = generate_summary(&context);

        Ok(Some(EmergencyView {
            health_id: patient.health_id,
            name: patient.name,
            blood_group: patient.blood_group,
            allergies: patient.allergies,
            emergency_contact: patient.emergency_contact,
            current_medications: patient.current_medications,
            conditions: patient.conditions,
            summary,
        }))
    }

    /// A patient together with all their report entries, most recent first.
    pub fn patient_records(
        &self,
        health_id: &HealthId,
    ) -> PatientResult<Option<(Patient, Vec<Report>)>> {
        let patient = match self.store.find_by_health_id(health_id)? {
            Some(patient) => patient,
            None => return Ok(None),
        };
        let reports = self.store.reports_for_patient(patient.id)?;
        Ok(Some((patient, reports)))
    }

    /// Thin lookup used by the QR scan and login flows.
    pub fn find_patient(&self, health_id: &HealthId) -> PatientResult<Option<Patient>> {
        self.store.find_by_health_id(health_id)
    }

    /// All stored patients, oldest first.
    pub fn list_patients(&self) -> PatientResult<Vec<Patient>> {
        self.store.list_patients()
    }

    /// Loads the demo dataset if the store is empty.
    pub fn seed_demo_data(&self) -> PatientResult<SeedOutcome> {
        self.store.seed_demo_data()
    }
}

/// Builds the labelled text block the summary generator reads.
///
/// The labels here are the ones the generator's field table searches for;
/// report entries are appended as a single `Title: value (date), ` run so
/// the risk scan sees them as one line.
fn medical_context(patient: &Patient, recent_reports: &[Report]) -> String {
    let mut context = format!(
        "Patient: {}\nBlood Group: {}\nAllergies: {}\nCurrent Medications: {}\nConditions: {}\n\nRecent Medical Data:\n",
        patient.name,
        patient.blood_group,
        patient.allergies,
        patient.current_medications,
        patient.conditions,
    );
    for report in recent_reports {
        context.push_str(&format!(
            "{}: {} ({}), ",
            report.title, report.value, report.date
        ));
    }
    context
}
