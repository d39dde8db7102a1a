use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::models::verification::HealthResponse;

/// GET /health — liveness with the configured OCR provider.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ocr_provider: state.ocr.name().to_string(),
    })
}
