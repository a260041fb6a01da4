use crate::models::{HealthResponse, ServiceInfo, utc_now_iso};
use crate::state::AppState;
use axum::{Json, extract::State};
use std::collections::BTreeMap;

/// GET / — static service summary.
pub async fn describe() -> Json<ServiceInfo> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "POST /api/data".to_string(),
        "Submit a sensor reading".to_string(),
    );
    endpoints.insert(
        "GET /api/latest".to_string(),
        "Fetch the most recent reading".to_string(),
    );
    endpoints.insert(
        "GET /health".to_string(),
        "Liveness and data-availability check".to_string(),
    );

    Json(ServiceInfo {
        message: "Telemetry gateway is running".to_string(),
        version: crate::VERSION.to_string(),
        endpoints,
    })
}

/// GET /health — always succeeds while the process is reachable.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: utc_now_iso(),
        has_data: state.has_data().await,
    })
}
