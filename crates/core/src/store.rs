//! SQLite persistence for patients and their report entries.
//!
//! The store owns a single connection behind a mutex. Migrations are applied
//! at open time and tracked in a `schema_version` table, so opening an older
//! database upgrades it in place.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use epr_health_id::HealthId;

use crate::error::{PatientError, PatientResult};

/// How many report entries feed the emergency summary context.
pub const RECENT_REPORT_LIMIT: i64 = 3;

/// A stored patient row.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: i64,
    pub health_id: HealthId,
    pub name: String,
    pub blood_group: String,
    pub allergies: String,
    pub emergency_contact: String,
    pub current_medications: String,
    pub conditions: String,
}

/// A patient row that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub health_id: HealthId,
    pub name: String,
    pub blood_group: String,
    pub allergies: String,
    pub emergency_contact: String,
    pub current_medications: String,
    pub conditions: String,
}

/// A stored report entry.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: i64,
    pub patient_id: i64,
    pub section: String,
    pub title: String,
    pub value: String,
    pub date: String,
}

/// A report entry that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub patient_id: i64,
    pub section: String,
    pub title: String,
    pub value: String,
    pub date: String,
}

/// Shared handle to the SQLite store.
///
/// Cloning is cheap; all clones serialise access through the same mutex.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens the database at `path`, creating it if necessary, and runs any
    /// pending migrations.
    pub fn open(path: &Path) -> PatientResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory database (for testing).
    pub fn open_in_memory() -> PatientResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> PatientResult<Self> {
        configure_pragmas(&conn)?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> PatientResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| PatientError::LockPoisoned)
    }

    /// Inserts a patient and returns its row id.
    pub fn insert_patient(&self, patient: &NewPatient) -> PatientResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO patients (health_id, name, blood_group, allergies, emergency_contact, current_medications, conditions)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                patient.health_id.as_str(),
                patient.name,
                patient.blood_group,
                patient.allergies,
                patient.emergency_contact,
                patient.current_medications,
                patient.conditions,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Looks a patient up by canonical health ID.
    pub fn find_by_health_id(&self, health_id: &HealthId) -> PatientResult<Option<Patient>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT id, health_id, name, blood_group, allergies, emergency_contact, current_medications, conditions
                 FROM patients WHERE health_id = ?1",
                params![health_id.as_str()],
                patient_columns,
            )
            .optional()?;
        row.map(patient_from_columns).transpose()
    }

    /// All stored patients, oldest first.
    pub fn list_patients(&self) -> PatientResult<Vec<Patient>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, health_id, name, blood_group, allergies, emergency_contact, current_medications, conditions
             FROM patients ORDER BY id",
        )?;
        let rows = stmt.query_map([], patient_columns)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(patient_from_columns(row?)?);
        }
        Ok(patients)
    }

    pub fn count_patients(&self) -> PatientResult<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Inserts a report entry and returns its row id.
    pub fn insert_report(&self, report: &NewReport) -> PatientResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO reports (patient_id, section, title, value, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                report.patient_id,
                report.section,
                report.title,
                report.value,
                report.date,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All report entries for a patient, most recent date first.
    pub fn reports_for_patient(&self, patient_id: i64) -> PatientResult<Vec<Report>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, patient_id, section, title, value, date
             FROM reports WHERE patient_id = ?1 ORDER BY date DESC, id",
        )?;
        let rows = stmt.query_map(params![patient_id], report_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// The most recent report entries for a patient, the window the
    /// emergency summary context is built from.
    pub fn recent_reports(&self, patient_id: i64) -> PatientResult<Vec<Report>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, patient_id, section, title, value, date
             FROM reports WHERE patient_id = ?1 ORDER BY date DESC, id LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![patient_id, RECENT_REPORT_LIMIT], report_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

type PatientColumns = (i64, String, String, String, String, String, String, String);

fn patient_columns(row: &rusqlite::Row<'_>) -> rusqlite::Result<PatientColumns> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn patient_from_columns(columns: PatientColumns) -> PatientResult<Patient> {
    let (id, health_id, name, blood_group, allergies, emergency_contact, current_medications, conditions) =
        columns;
    Ok(Patient {
        id,
        health_id: HealthId::parse(&health_id)?,
        name,
        blood_group,
        allergies,
        emergency_contact,
        current_medications,
        conditions,
    })
}

fn report_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Report> {
    Ok(Report {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        section: row.get(2)?,
        title: row.get(3)?,
        value: row.get(4)?,
        date: row.get(5)?,
    })
}

fn configure_pragmas(conn: &Connection) -> PatientResult<()> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

fn run_migrations(conn: &Connection) -> PatientResult<()> {
    let current_version = current_schema_version(conn);

    let migrations: &[(i64, &str)] = &[(1, include_str!("../migrations/001_initial.sql"))];

    for (version, sql) in migrations {
        if *version > current_version {
            tracing::info!("running store migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| PatientError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Current schema version, 0 when no schema exists yet.
fn current_schema_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, i64>(0)
    })
    .unwrap_or(0)
}
