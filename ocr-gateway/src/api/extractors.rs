use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::GatewayError;

/// `axum::Json` with rejections reported in the gateway's error format.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

// Every body problem is a server error here; only a missing image counts as
// a client error, and that is decided after parsing.
fn map_json_rejection(rejection: JsonRejection) -> GatewayError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            GatewayError::InvalidRequest(format!("Invalid JSON: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            GatewayError::InvalidRequest(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => GatewayError::InvalidRequest(
            "Missing `Content-Type: application/json` header".to_string(),
        ),
        JsonRejection::BytesRejection(err) => {
            GatewayError::Internal(format!("Failed to read request body: {}", err.body_text()))
        }
        _ => GatewayError::InvalidRequest(rejection.body_text()),
    }
}
