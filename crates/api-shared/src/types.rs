//! Wire types shared across the EPR API surfaces.
//!
//! Plain serde structs, also exposed as OpenAPI schemas, so request
//! handlers and clients agree on one set of shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Emergency view of a patient record, including the generated summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmergencyRes {
    pub health_id: String,
    pub name: String,
    pub blood_group: String,
    pub allergies: String,
    pub emergency_contact: String,
    pub current_medications: String,
    pub conditions: String,
    pub summary: String,
}

/// One stored report entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportRes {
    pub id: i64,
    pub section: String,
    pub title: String,
    pub value: String,
    pub date: String,
}

/// Full report listing for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordsRes {
    pub health_id: String,
    pub patient_name: String,
    pub reports: Vec<ReportRes>,
}

/// Credentials for the demo login flow. Missing fields deserialise to
/// empty strings, which fail verification rather than the request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginReq {
    #[serde(default)]
    pub health_id: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRes {
    pub token: String,
    pub patient_name: String,
}

/// Raw QR payload as captured by the scanner.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScanQrReq {
    #[serde(default)]
    pub qr_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScanQrRes {
    pub health_id: String,
    pub patient_name: String,
    pub qr_data_received: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QrLoginRes {
    pub token: String,
    pub patient_name: String,
    pub health_id: String,
}

/// The QR payload variants a scanner may hand us for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QrFormats {
    #[serde(rename = "14_digit")]
    pub fourteen_digit: String,
    pub standard_format: String,
    pub text_format: String,
    pub medical_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestQrRes {
    pub patient_name: String,
    pub health_id: String,
    pub qr_formats: QrFormats,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeReq {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRes {
    pub summary: String,
}

/// Outcome of the demo-data seeding endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedRes {
    pub status: String,
}
