use axum::Json;
use utoipa::OpenApi;

use super::dto;
use super::handlers;
use crate::config::ClientEndpoints;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OCR Gateway API",
        version = "1.0.0",
        description = "Recognize text in base64-encoded images.",
    ),
    paths(
        handlers::ocr::recognize,
        handlers::config::get_config,
        handlers::health::health_check,
    ),
    components(schemas(
        dto::OcrRequest,
        dto::OcrResponse,
        dto::ErrorBody,
        dto::HealthResponse,
        ClientEndpoints,
    )),
    tags(
        (name = "ocr", description = "Text recognition"),
        (name = "config", description = "Client configuration"),
        (name = "health", description = "Health check"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
