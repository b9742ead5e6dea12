/// Waitlist error taxonomy
///
/// Every failure a signup or count request can run into. How each one is
/// reported differs by path:
///
/// - Write path: all variants surface to the caller
/// - Read path: only `MissingConfiguration` surfaces; upstream failures
///   degrade to "count unavailable"

use crate::models::SignupError;
use crate::store::StoreError;
use thiserror::Error;

/// Waitlist errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    /// Request body was not valid JSON
    #[error("Invalid JSON payload.")]
    MalformedRequest,

    /// Email did not match `local@domain.tld`
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Store URL or key not configured
    #[error("Server is missing waitlist store configuration.")]
    MissingConfiguration,

    /// The store answered with a non-success status
    #[error("{message}")]
    UpstreamRejected {
        /// HTTP status returned by the store
        status: u16,

        /// Best-effort message from the store's response body
        message: String,
    },

    /// The store could not be reached or answered with something unusable
    #[error("waitlist store unreachable: {0}")]
    UpstreamUnreachable(String),
}

/// Waitlist result type alias
pub type WaitlistResult<T> = Result<T, WaitlistError>;

impl From<SignupError> for WaitlistError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::InvalidEmail => WaitlistError::InvalidEmail,
        }
    }
}

impl From<StoreError> for WaitlistError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected { status, message } => {
                WaitlistError::UpstreamRejected { status, message }
            }
            StoreError::Unreachable(msg) => WaitlistError::UpstreamUnreachable(msg),
            StoreError::MissingCount(header) => WaitlistError::UpstreamUnreachable(format!(
                "unusable content-range: {:?}",
                header
            )),
        }
    }
}
