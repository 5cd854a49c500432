//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Service status with the active localization settings

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Service status.
///
/// Reports the localization settings the server validated at startup.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "supported_locales": state.settings.supported_locales(),
        "default_locale": state.settings.default_locale(),
        "default_timezone": state.settings.default_timezone().name(),
    }))
}
