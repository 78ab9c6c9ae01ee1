use axum::{extract::State, Json};

use crate::api::AppState;
use crate::config::ClientEndpoints;

/// `GET /config`
///
/// Endpoints the browser client should talk to. Read from the environment
/// on every call.
#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    responses(
        (status = 200, description = "Client endpoint configuration", body = ClientEndpoints),
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ClientEndpoints> {
    Json(ClientEndpoints::resolve(&state.config.server))
}
