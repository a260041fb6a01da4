use crate::error::ApiError;
use crate::models::{SensorPayload, SensorReading, SubmitResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/data — accept a reading and make it the latest.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SensorPayload>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    // 1. Shape validation: missing or wrong-typed required fields surface
    //    here as a 422 with the offending field named.
    let Json(payload) = payload?;

    if payload.device_id.is_empty() {
        return Err(ApiError::Validation(
            "device_id: must be a non-empty string".to_string(),
        ));
    }

    // 2. Fill server-assigned defaults and replace the slot whole.
    let reading = payload.into_reading();
    let latest = state.store(reading).await;

    tracing::info!(
        device_id = %latest.device_id,
        temp = latest.temperature,
        hum = latest.humidity,
        source = %latest.source,
        "reading accepted"
    );

    Ok(Json(SubmitResponse {
        ok: true,
        message: "Data received successfully".to_string(),
        latest,
    }))
}

/// GET /api/latest — return the stored reading verbatim.
pub async fn latest(State(state): State<AppState>) -> Result<Json<SensorReading>, ApiError> {
    state.latest().await.map(Json).ok_or_else(|| {
        ApiError::NotFound("No data yet. Please send data first using POST /api/data".to_string())
    })
}
