//! Health endpoint — bootstrap check that never calls the provider.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub greeting: String,
    pub version: &'static str,
    /// Whether an API key is present. Not a guarantee the provider will answer.
    pub provider_configured: bool,
}

/// `GET /api/health` — version and provider credential presence.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        greeting: juris_core::hello_world(),
        version: juris_core::version(),
        provider_configured: state.provider.is_configured(),
    })
}
