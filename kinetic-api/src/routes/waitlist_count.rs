/// Waitlist count endpoint
///
/// # Endpoint
///
/// ```text
/// GET /api/waitlist-count
/// ```
///
/// # Response
///
/// ```json
/// { "count": 37 }
/// ```
///
/// `count` is `null` when the store could not report a total. The status
/// is 200 in that case; only a missing store configuration yields 500.

use crate::app::AppState;
use axum::{extract::State, http::StatusCode, Json};
use kinetic_shared::error::WaitlistError;
use serde::{Deserialize, Serialize};

/// Count response
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    /// Total signups, or `null` when unavailable
    pub count: Option<u64>,
}

/// Return the number of waitlist signups
pub async fn waitlist_count(State(state): State<AppState>) -> (StatusCode, Json<CountResponse>) {
    match state.counter.fetch().await {
        Ok(count) => (StatusCode::OK, Json(CountResponse { count })),
        Err(WaitlistError::MissingConfiguration) => {
            tracing::error!("waitlist store is not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CountResponse { count: None }),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "waitlist count unavailable");
            (StatusCode::OK, Json(CountResponse { count: None }))
        }
    }
}
