//! # EPR Core
//!
//! Core business logic for the EPR emergency-lookup system.
//!
//! This crate contains the patient store and pure data operations:
//! - SQLite persistence with versioned migrations
//! - Emergency view assembly (patient fields plus recent report entries)
//! - Rule-based clinical summary generation
//!
//! **No API concerns**: HTTP servers and wire formats belong in `api-rest` and `api-shared`.

pub mod error;
pub mod patient;
pub mod seed;
pub mod store;
pub mod summary;

pub use error::{PatientError, PatientResult};
pub use patient::{EmergencyView, PatientService};
pub use seed::SeedOutcome;
pub use store::{NewPatient, NewReport, Patient, Report, Store};
pub use summary::generate_summary;
