#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid health ID: {0}")]
    HealthId(#[from] epr_health_id::HealthIdError),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("migration to schema version {version} failed: {reason}")]
    MigrationFailed { version: i64, reason: String },
    #[error("store lock poisoned")]
    LockPoisoned,
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
