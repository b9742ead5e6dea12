/// Waitlist signup model
///
/// A `SignupRecord` is one row of the external `waitlist_signups` table.
/// Records are only ever created; this system never reads one back
/// individually, updates or deletes it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE waitlist_signups (
///     id BIGSERIAL PRIMARY KEY,
///     email TEXT NOT NULL,
///     stage TEXT,
///     source TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```
/// use kinetic_shared::models::signup::SignupRecord;
///
/// let record = SignupRecord::new("  User@Example.COM ", Some("  peaking ")).unwrap();
/// assert_eq!(record.email, "user@example.com");
/// assert_eq!(record.stage.as_deref(), Some("peaking"));
/// assert_eq!(record.source, "website");
/// ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Origin tag written with every record created by this service
pub const WEBSITE_SOURCE: &str = "website";

/// `local@domain.tld`, where no part contains whitespace or `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Signup validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// Email is empty or does not look like `local@domain.tld`
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// A validated, normalized waitlist signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    /// Trimmed, lowercased email address
    pub email: String,

    /// Training stage label, serialized as `null` when absent
    ///
    /// Never `Some("")`.
    pub stage: Option<String>,

    /// Origin channel, always [`WEBSITE_SOURCE`] for records built here
    pub source: String,
}

impl SignupRecord {
    /// Builds a record from raw form input
    ///
    /// The email is trimmed and lowercased before it is checked. A blank
    /// stage is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SignupError::InvalidEmail` if the normalized email does not
    /// match the expected shape.
    pub fn new(email: &str, stage: Option<&str>) -> Result<Self, SignupError> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(SignupError::InvalidEmail);
        }

        Ok(Self {
            email,
            stage: stage.and_then(normalize_stage),
            source: WEBSITE_SOURCE.to_string(),
        })
    }
}

/// Trims surrounding whitespace and lowercases
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trims the label, returning `None` when nothing is left
pub fn normalize_stage(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checks an already-normalized email against the signup pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
