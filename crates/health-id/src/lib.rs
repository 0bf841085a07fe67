//! Health-ID handling for the EPR system.
//!
//! A health ID is the national identifier printed on patient cards and
//! embedded in QR codes. Its canonical form is four hyphen-separated groups
//! of lengths 4, 4, 4 and 2, for example `1234-5678-9012-34`.
//!
//! This crate provides:
//!
//! - [`HealthId`]: a validated wrapper that can only hold the canonical form.
//! - [`recover_health_id`]: best-effort recovery of a canonical ID from
//!   free-form scanner input (raw digit runs, labelled card text, and so on).

mod id;
pub mod scan;

pub use id::HealthId;
pub use scan::recover_health_id;

/// Error type for health-ID operations.
#[derive(Debug, thiserror::Error)]
pub enum HealthIdError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for health-ID operations.
pub type HealthIdResult<T> = Result<T, HealthIdError>;
