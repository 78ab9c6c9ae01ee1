//! Recognition endpoint.

use axum::{extract::State, Json};
use tracing::{error, info, warn};

use crate::api::dto::{ErrorBody, OcrRequest, OcrResponse};
use crate::api::{AppJson, AppState};
use crate::error::{GatewayError, Result};

/// `POST /ocr`
///
/// Recognizes the text in a base64-encoded image. Detected lines are joined
/// with `\n` in the order the engine reports them; an image without text
/// yields an empty string.
#[utoipa::path(
    post,
    path = "/ocr",
    tag = "ocr",
    request_body = OcrRequest,
    responses(
        (status = 200, description = "Recognized text", body = OcrResponse),
        (status = 400, description = "No image provided", body = ErrorBody),
        (status = 500, description = "Body, decode or engine failure", body = ErrorBody),
    )
)]
pub async fn recognize(
    State(state): State<AppState>,
    body: std::result::Result<AppJson<OcrRequest>, GatewayError>,
) -> Result<Json<OcrResponse>> {
    match run(&state, body).await {
        Ok(text) => {
            info!(len = text.chars().count(), "OCR succeeded");
            Ok(Json(OcrResponse { text }))
        }
        Err(GatewayError::MissingImage) => {
            warn!("OCR request without image");
            Err(GatewayError::MissingImage)
        }
        Err(e) => {
            error!(error = %e, "OCR failed");
            Err(e)
        }
    }
}

async fn run(
    state: &AppState,
    body: std::result::Result<AppJson<OcrRequest>, GatewayError>,
) -> Result<String> {
    let AppJson(req) = body?;
    let image = req.into_image()?;
    state.ocr.recognize_text(&image).await
}
