/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Waitlist handlers return `Result<T, ApiError>`, which converts to the
/// response shape the landing page expects:
///
/// ```json
/// { "success": false, "error": "Please enter a valid email address." }
/// ```
///
/// # Example
///
/// ```
/// use kinetic_api::error::{ApiError, ApiResult};
/// use axum::Json;
/// use serde_json::json;
///
/// async fn handler(email: &str) -> ApiResult<Json<serde_json::Value>> {
///     if !email.contains('@') {
///         return Err(ApiError::BadRequest("Please enter a valid email address.".to_string()));
///     }
///     Ok(Json(json!({ "success": true })))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kinetic_shared::{error::WaitlistError, store::DEFAULT_REJECTION_MESSAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Bad request (400) - unparseable body or invalid email
    BadRequest(String),

    /// Store URL or key not configured (500)
    MissingConfiguration,

    /// The store rejected the write (500), carrying its message
    UpstreamRejected(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingConfiguration
            | ApiError::UpstreamRejected(_)
            | ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the visitor
    ///
    /// Internal details are replaced with a generic message.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::UpstreamRejected(msg) => msg.clone(),
            ApiError::MissingConfiguration => WaitlistError::MissingConfiguration.to_string(),
            ApiError::InternalError(_) => DEFAULT_REJECTION_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::MissingConfiguration => write!(f, "Missing store configuration"),
            ApiError::UpstreamRejected(msg) => write!(f, "Upstream rejected: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingConfiguration => {
                tracing::error!("waitlist store is not configured");
            }
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
            }
            _ => {}
        }

        let body = Json(ErrorResponse {
            success: false,
            error: self.public_message(),
        });

        (self.status_code(), body).into_response()
    }
}

/// Convert waitlist errors to API errors
impl From<WaitlistError> for ApiError {
    fn from(err: WaitlistError) -> Self {
        match err {
            WaitlistError::MalformedRequest | WaitlistError::InvalidEmail => {
                ApiError::BadRequest(err.to_string())
            }
            WaitlistError::MissingConfiguration => ApiError::MissingConfiguration,
            WaitlistError::UpstreamRejected { message, .. } => ApiError::UpstreamRejected(message),
            WaitlistError::UpstreamUnreachable(msg) => ApiError::InternalError(msg),
        }
    }
}
