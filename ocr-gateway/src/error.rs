use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned when a request carries no usable `image` field.
pub const NO_IMAGE_PROVIDED: &str = "No image provided";

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No image provided")]
    MissingImage,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR engine initialization failed: {0}")]
    EngineInit(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Only a missing image is the caller's fault; everything else, including
    /// an unparseable body, is reported as a server error.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingImage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
