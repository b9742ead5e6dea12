/// Health check endpoint
///
/// Reports that the server is running and whether the signup store is
/// configured. It does not call the store.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "store": "configured"
/// }
/// ```

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Store configuration status
    pub store: String,
}

/// Health check handler
///
/// Status is `degraded` when the store is not configured, since signups
/// cannot succeed.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let configured = state.config.store.is_some();

    Json(HealthResponse {
        status: if configured { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if configured { "configured" } else { "missing" }.to_string(),
    })
}
