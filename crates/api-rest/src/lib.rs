//! # API REST
//!
//! REST API implementation for EPR.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::auth;
use api_shared::types::{
    EmergencyRes, ErrorRes, HealthRes, LoginReq, LoginRes, QrFormats, QrLoginRes, RecordsRes,
    ReportRes, ScanQrReq, ScanQrRes, SeedRes, SummarizeReq, SummarizeRes, TestQrRes,
};
use api_shared::HealthService;
use epr_core::{generate_summary, PatientService, SeedOutcome, Store};
use epr_health_id::{recover_health_id, HealthId};

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers,
/// including the PatientService instance for data operations.
#[derive(Clone)]
pub struct AppState {
    patients: PatientService,
}

impl AppState {
    /// Creates application state backed by the given store.
    pub fn new(store: Store) -> Self {
        Self {
            patients: PatientService::new(store),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        init_db,
        emergency,
        records,
        login,
        scan_qr,
        qr_login,
        generate_test_qr,
        summarize,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        SeedRes,
        EmergencyRes,
        ReportRes,
        RecordsRes,
        LoginReq,
        LoginRes,
        ScanQrReq,
        ScanQrRes,
        QrLoginRes,
        QrFormats,
        TestQrRes,
        SummarizeReq,
        SummarizeRes,
    ))
)]
struct ApiDoc;

/// Builds the REST API router with all routes, Swagger UI and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/init-db", get(init_db))
        .route("/emergency/:health_id", get(emergency))
        .route("/records/:health_id", get(records))
        .route("/login", post(login))
        .route("/api/scan-qr", post(scan_qr))
        .route("/api/qr-login", post(qr_login))
        .route("/api/generate-test-qr/:health_id", get(generate_test_qr))
        .route("/summarize", post(summarize))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the given address and serves the REST API until the process exits.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the EPR REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/init-db",
    responses(
        (status = 200, description = "Seeding outcome", body = SeedRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Seeds the demo dataset
///
/// Inserts the demo patients and their report entries unless the database
/// already holds patients, in which case nothing is written.
///
/// # Returns
/// * `Ok(Json<SeedRes>)` - Outcome of the seeding attempt
/// * `Err((StatusCode, Json<ErrorRes>))` - Internal server error if seeding fails
#[axum::debug_handler]
async fn init_db(
    State(state): State<AppState>,
) -> Result<Json<SeedRes>, (StatusCode, Json<ErrorRes>)> {
    match state.patients.seed_demo_data() {
        Ok(SeedOutcome::Seeded) => Ok(Json(SeedRes {
            status: "seeded with sample data".into(),
        })),
        Ok(SeedOutcome::AlreadySeeded) => Ok(Json(SeedRes {
            status: "already seeded".into(),
        })),
        Err(e) => {
            tracing::error!("Seed error: {:?}", e);
            Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/emergency/{health_id}",
    responses(
        (status = 200, description = "Emergency view with generated summary", body = EmergencyRes),
        (status = 400, description = "Malformed health ID", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Emergency lookup for a patient by canonical health ID
///
/// Retrieves the stored record, folds the most recent reports into a
/// medical context block and returns the record together with the
/// generated clinical summary.
///
/// # Returns
/// * `Ok(Json<EmergencyRes>)` - Patient demographics plus the summary
/// * `Err((StatusCode, Json<ErrorRes>))` - Malformed ID, unknown patient or internal error
#[axum::debug_handler]
async fn emergency(
    State(state): State<AppState>,
    AxumPath(health_id): AxumPath<String>,
) -> Result<Json<EmergencyRes>, (StatusCode, Json<ErrorRes>)> {
    let health_id = match HealthId::parse(&health_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Invalid health ID: {:?}", e);
            return Err(err(StatusCode::BAD_REQUEST, "Invalid health ID"));
        }
    };

    match state.patients.emergency_view(&health_id) {
        Ok(Some(view)) => Ok(Json(EmergencyRes {
            health_id: view.health_id.to_string(),
            name: view.name,
            blood_group: view.blood_group,
            allergies: view.allergies,
            emergency_contact: view.emergency_contact,
            current_medications: view.current_medications,
            conditions: view.conditions,
            summary: view.summary,
        })),
        Ok(None) => Err(err(StatusCode::NOT_FOUND, "Patient not found")),
        Err(e) => {
            tracing::error!("Emergency lookup error: {:?}", e);
            Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/records/{health_id}",
    responses(
        (status = 200, description = "All reports for the patient, newest first", body = RecordsRes),
        (status = 400, description = "Malformed health ID", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Full report listing for a patient
#[axum::debug_handler]
async fn records(
    State(state): State<AppState>,
    AxumPath(health_id): AxumPath<String>,
) -> Result<Json<RecordsRes>, (StatusCode, Json<ErrorRes>)> {
    let health_id = match HealthId::parse(&health_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Invalid health ID: {:?}", e);
            return Err(err(StatusCode::BAD_REQUEST, "Invalid health ID"));
        }
    };

    match state.patients.patient_records(&health_id) {
        Ok(Some((patient, reports))) => Ok(Json(RecordsRes {
            health_id: health_id.to_string(),
            patient_name: patient.name,
            reports: reports
                .into_iter()
                .map(|report| ReportRes {
                    id: report.id,
                    section: report.section,
                    title: report.title,
                    value: report.value,
                    date: report.date,
                })
                .collect(),
        })),
        Ok(None) => Err(err(StatusCode::NOT_FOUND, "Patient not found")),
        Err(e) => {
            tracing::error!("Records lookup error: {:?}", e);
            Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login succeeded", body = LoginRes),
        (status = 401, description = "Invalid credentials", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Demo login with health ID and password
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginReq>,
) -> Result<Json<LoginRes>, (StatusCode, Json<ErrorRes>)> {
    let patient = match HealthId::parse(&req.health_id) {
        Ok(id) => match state.patients.find_patient(&id) {
            Ok(patient) => patient,
            Err(e) => {
                tracing::error!("Login lookup error: {:?}", e);
                return Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
            }
        },
        Err(_) => None,
    };

    match patient {
        Some(patient) if auth::verify_demo_password(&req.password) => Ok(Json(LoginRes {
            token: auth::new_session_token(),
            patient_name: patient.name,
        })),
        _ => Err(err(StatusCode::UNAUTHORIZED, "Invalid credentials")),
    }
}

#[utoipa::path(
    post,
    path = "/api/scan-qr",
    request_body = ScanQrReq,
    responses(
        (status = 200, description = "Health ID recovered from the QR payload", body = ScanQrRes),
        (status = 400, description = "Empty or unrecognised QR payload", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn scan_qr(
    State(state): State<AppState>,
    Json(req): Json<ScanQrReq>,
) -> Result<Json<ScanQrRes>, (StatusCode, Json<ErrorRes>)> {
    let qr_data = req.qr_data.trim();
    if qr_data.is_empty() {
        return Err(err(StatusCode::BAD_REQUEST, "No QR data provided"));
    }

    let health_id = match recover_health_id(qr_data) {
        Some(id) => id,
        None => {
            return Err(err(
                StatusCode::BAD_REQUEST,
                "No valid health ID found in QR code. Please ensure the QR code contains a \
                 14-digit health ID in format XXXX-XXXX-XXXX-XX or XXXXXXXXXXXXXX",
            ));
        }
    };

    match state.patients.find_patient(&health_id) {
        Ok(Some(patient)) => Ok(Json(ScanQrRes {
            health_id: health_id.to_string(),
            patient_name: patient.name,
            qr_data_received: qr_data.to_string(),
        })),
        Ok(None) => Err(err(
            StatusCode::NOT_FOUND,
            "Patient not found with this health ID",
        )),
        Err(e) => {
            tracing::error!("Scan QR lookup error: {:?}", e);
            Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/qr-login",
    request_body = ScanQrReq,
    responses(
        (status = 200, description = "QR login succeeded", body = QrLoginRes),
        (status = 400, description = "Empty or unrecognised QR payload", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn qr_login(
    State(state): State<AppState>,
    Json(req): Json<ScanQrReq>,
) -> Result<Json<QrLoginRes>, (StatusCode, Json<ErrorRes>)> {
    let qr_data = req.qr_data.trim();
    if qr_data.is_empty() {
        return Err(err(StatusCode::BAD_REQUEST, "No QR data provided"));
    }

    let health_id = match recover_health_id(qr_data) {
        Some(id) => id,
        None => {
            return Err(err(
                StatusCode::BAD_REQUEST,
                "No valid health ID found in QR code",
            ));
        }
    };

    match state.patients.find_patient(&health_id) {
        Ok(Some(patient)) => Ok(Json(QrLoginRes {
            token: auth::new_session_token(),
            patient_name: patient.name,
            health_id: health_id.to_string(),
        })),
        Ok(None) => Err(err(StatusCode::NOT_FOUND, "Patient not found")),
        Err(e) => {
            tracing::error!("QR login lookup error: {:?}", e);
            Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/generate-test-qr/{health_id}",
    responses(
        (status = 200, description = "QR payload variants for the patient", body = TestQrRes),
        (status = 400, description = "Malformed health ID", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn generate_test_qr(
    State(state): State<AppState>,
    AxumPath(health_id): AxumPath<String>,
) -> Result<Json<TestQrRes>, (StatusCode, Json<ErrorRes>)> {
    let health_id = match HealthId::parse(&health_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Invalid health ID: {:?}", e);
            return Err(err(StatusCode::BAD_REQUEST, "Invalid health ID"));
        }
    };

    let patient = match state.patients.find_patient(&health_id) {
        Ok(Some(patient)) => patient,
        Ok(None) => return Err(err(StatusCode::NOT_FOUND, "Patient not found")),
        Err(e) => {
            tracing::error!("Test QR lookup error: {:?}", e);
            return Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
        }
    };

    let qr_formats = QrFormats {
        fourteen_digit: health_id.digits(),
        standard_format: health_id.to_string(),
        text_format: format!("Health ID: {} | Name: {}", health_id, patient.name),
        medical_format: format!(
            "Patient: {} | Health ID: {} | Blood Group: {}",
            patient.name, health_id, patient.blood_group
        ),
    };

    Ok(Json(TestQrRes {
        patient_name: patient.name,
        health_id: health_id.to_string(),
        qr_formats,
        message: "Use any of these formats in your QR code for testing".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeReq,
    responses(
        (status = 200, description = "Generated summary", body = SummarizeRes),
        (status = 400, description = "Empty text", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn summarize(
    State(_state): State<AppState>,
    Json(req): Json<SummarizeReq>,
) -> Result<Json<SummarizeRes>, (StatusCode, Json<ErrorRes>)> {
    if req.text.is_empty() {
        return Err(err(StatusCode::BAD_REQUEST, "No text provided"));
    }

    Ok(Json(SummarizeRes {
        summary: generate_summary(&req.text),
    }))
}

// Helper function
fn err(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorRes>) {
    (
        status,
        Json(ErrorRes {
            error: message.into(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn seeded_state() -> AppState {
        let state = AppState::new(Store::open_in_memory().unwrap());
        state.patients.seed_demo_data().unwrap();
        state
    }

    fn seeded_app() -> Router {
        router(seeded_state())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 65536)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let response = seeded_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["ok"], true);
        assert_eq!(json["message"], "EPR REST API is alive");
    }

    #[tokio::test]
    async fn init_db_seeds_empty_database() {
        let app = router(AppState::new(Store::open_in_memory().unwrap()));
        let response = app.oneshot(get_request("/init-db")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "seeded with sample data");
    }

    #[tokio::test]
    async fn init_db_skips_seeded_database() {
        let response = seeded_app().oneshot(get_request("/init-db")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "already seeded");
    }

    #[tokio::test]
    async fn emergency_returns_patient_with_summary() {
        let response = seeded_app()
            .oneshot(get_request("/emergency/1234-5675-9877-98"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["health_id"], "1234-5675-9877-98");
        assert_eq!(json["name"], "Arjun Kumar");
        assert_eq!(json["blood_group"], "B+");
        assert_eq!(json["emergency_contact"], "9876543210");
        assert_eq!(
            json["summary"],
            "Blood type: B+ | Allergies: Peanuts, Dust | \
             Current medications: Metformin 500mg daily | \
             Medical conditions: Type 2 Diabetes, Hypertension | \
             Seek professional medical advice for emergency care."
        );
    }

    #[tokio::test]
    async fn emergency_flags_cholesterol_risk() {
        let response = seeded_app()
            .oneshot(get_request("/emergency/6789-0854-8484-85"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["name"], "Ravi Singh");
        let summary = json["summary"].as_str().unwrap();
        assert!(summary.contains("Note: Cholesterol levels elevated"));
        assert!(summary.contains("No known allergies"));
    }

    #[tokio::test]
    async fn emergency_unknown_patient_returns_404() {
        let response = seeded_app()
            .oneshot(get_request("/emergency/9999-9999-9999-99"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"], "Patient not found");
    }

    #[tokio::test]
    async fn emergency_malformed_id_returns_400() {
        let response = seeded_app()
            .oneshot(get_request("/emergency/not-an-id"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"], "Invalid health ID");
    }

    #[tokio::test]
    async fn records_lists_reports_newest_first() {
        let response = seeded_app()
            .oneshot(get_request("/records/1234-5675-9877-98"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["health_id"], "1234-5675-9877-98");
        assert_eq!(json["patient_name"], "Arjun Kumar");

        let reports = json["reports"].as_array().unwrap();
        assert_eq!(reports.len(), 6);
        assert_eq!(reports[0]["title"], "Blood Pressure");
        assert_eq!(reports[0]["date"], "2025-01-15");
        assert_eq!(reports[5]["title"], "Past Surgeries");
    }

    #[tokio::test]
    async fn login_succeeds_with_demo_password() {
        let response = seeded_app()
            .oneshot(post_json(
                "/login",
                r#"{"health_id": "1234-5675-9877-98", "password": "test"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["patient_name"], "Arjun Kumar");
        assert!(!json["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let response = seeded_app()
            .oneshot(post_json(
                "/login",
                r#"{"health_id": "1234-5675-9877-98", "password": "nope"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = response_json(response).await;
        assert_eq!(json["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn login_rejects_unknown_patient() {
        let response = seeded_app()
            .oneshot(post_json(
                "/login",
                r#"{"health_id": "9999-9999-9999-99", "password": "test"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn scan_qr_recovers_embedded_id() {
        let response = seeded_app()
            .oneshot(post_json(
                "/api/scan-qr",
                r#"{"qr_data": "Patient: Arjun Kumar | Health ID: 1234-5675-9877-98 | Blood Group: B+"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["health_id"], "1234-5675-9877-98");
        assert_eq!(json["patient_name"], "Arjun Kumar");
        assert_eq!(
            json["qr_data_received"],
            "Patient: Arjun Kumar | Health ID: 1234-5675-9877-98 | Blood Group: B+"
        );
    }

    #[tokio::test]
    async fn scan_qr_rejects_empty_payload() {
        let response = seeded_app()
            .oneshot(post_json("/api/scan-qr", r#"{"qr_data": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"], "No QR data provided");
    }

    #[tokio::test]
    async fn scan_qr_rejects_unrecognised_payload() {
        let response = seeded_app()
            .oneshot(post_json("/api/scan-qr", r#"{"qr_data": "hello world"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(
            json["error"],
            "No valid health ID found in QR code. Please ensure the QR code contains a \
             14-digit health ID in format XXXX-XXXX-XXXX-XX or XXXXXXXXXXXXXX"
        );
    }

    #[tokio::test]
    async fn scan_qr_unknown_patient_returns_404() {
        let response = seeded_app()
            .oneshot(post_json("/api/scan-qr", r#"{"qr_data": "98765432109876"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"], "Patient not found with this health ID");
    }

    #[tokio::test]
    async fn qr_login_issues_token_for_digit_payload() {
        let response = seeded_app()
            .oneshot(post_json("/api/qr-login", r#"{"qr_data": "12345675987798"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["health_id"], "1234-5675-9877-98");
        assert_eq!(json["patient_name"], "Arjun Kumar");
        assert!(!json["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn qr_login_rejects_unrecognised_payload() {
        let response = seeded_app()
            .oneshot(post_json("/api/qr-login", r#"{"qr_data": "garbage"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"], "No valid health ID found in QR code");
    }

    #[tokio::test]
    async fn qr_login_unknown_patient_returns_404() {
        let response = seeded_app()
            .oneshot(post_json("/api/qr-login", r#"{"qr_data": "11112222333344"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"], "Patient not found");
    }

    #[tokio::test]
    async fn generate_test_qr_lists_formats() {
        let response = seeded_app()
            .oneshot(get_request("/api/generate-test-qr/6789-0854-8484-85"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["patient_name"], "Ravi Singh");
        assert_eq!(json["qr_formats"]["14_digit"], "67890854848485");
        assert_eq!(json["qr_formats"]["standard_format"], "6789-0854-8484-85");
        assert_eq!(
            json["qr_formats"]["text_format"],
            "Health ID: 6789-0854-8484-85 | Name: Ravi Singh"
        );
        assert_eq!(
            json["qr_formats"]["medical_format"],
            "Patient: Ravi Singh | Health ID: 6789-0854-8484-85 | Blood Group: O+"
        );
    }

    #[tokio::test]
    async fn summarize_generates_summary() {
        let response = seeded_app()
            .oneshot(post_json(
                "/summarize",
                r#"{"text": "Blood Group: B+\nAllergies: None known\n"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let summary = json["summary"].as_str().unwrap();
        assert!(summary.starts_with("Blood type: B+ | No known allergies"));
        assert!(summary.ends_with("Seek professional medical advice for emergency care."));
    }

    #[tokio::test]
    async fn summarize_rejects_empty_text() {
        let response = seeded_app()
            .oneshot(post_json("/summarize", r#"{"text": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"], "No text provided");
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = seeded_app()
            .oneshot(get_request("/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
