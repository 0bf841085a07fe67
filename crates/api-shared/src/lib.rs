//! # API Shared
//!
//! Shared utilities and definitions for EPR APIs.
//!
//! Contains:
//! - Wire types used by request handlers (`types` module)
//! - Shared services like `HealthService`
//! - Authentication utilities for the demo login flow
//!
//! Used by `api-rest` for common functionality.

pub mod auth;
pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
