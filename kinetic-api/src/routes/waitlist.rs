/// Waitlist signup endpoint
///
/// # Endpoint
///
/// ```text
/// POST /api/waitlist
/// Content-Type: application/json
///
/// {
///   "email": "you@domain.com",
///   "stage": "peaking"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON, or the email is invalid
/// - `500 Internal Server Error`: Store not configured, or the write failed

use crate::{app::AppState, error::ApiResult};
use axum::{body::Bytes, extract::State, Json};
use kinetic_shared::waitlist::SignupRequest;
use serde::{Deserialize, Serialize};

/// Signup response
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    /// Always true; failures use `ErrorResponse`
    pub success: bool,
}

/// Submit a waitlist signup
///
/// The body is read raw rather than through `Json<T>` so that any valid
/// JSON is accepted regardless of `Content-Type`, and non-string fields
/// degrade to an invalid email instead of a deserialization error.
pub async fn submit_signup(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SignupResponse>> {
    let request = SignupRequest::from_json(&body)?;

    state.submitter.submit(request).await?;

    Ok(Json(SignupResponse { success: true }))
}
