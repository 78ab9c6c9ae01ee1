use axum::{extract::State, Json};

use crate::api::dto::HealthResponse;
use crate::api::AppState;

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine: state.ocr.engine_name().to_string(),
        languages: state.config.ocr.languages.clone(),
    })
}
