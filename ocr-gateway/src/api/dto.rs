//! Wire types for the HTTP API.
//!
//! The field names here are a contract with the browser client and must not
//! be renamed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GatewayError, Result};

/// Body of `POST /ocr`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct OcrRequest {
    /// Base64-encoded image, optionally prefixed with a data-URL header
    /// (`data:image/png;base64,`).
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: Option<Value>,
}

impl OcrRequest {
    /// The image payload. Any empty value (`null`, `false`, `0`, `""`, `[]`,
    /// `{}`) counts as no image at all; other non-string values are rejected
    /// as a malformed body.
    pub fn into_image(self) -> Result<String> {
        match self.image {
            Some(Value::String(image)) if !image.is_empty() => Ok(image),
            Some(value) if !is_empty_value(&value) => Err(GatewayError::InvalidRequest(
                format!("image must be a base64 string, got {value}"),
            )),
            _ => Err(GatewayError::MissingImage),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Successful `POST /ocr` response: recognized lines joined with `\n`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OcrResponse {
    pub text: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub engine: String,
    pub languages: String,
}
