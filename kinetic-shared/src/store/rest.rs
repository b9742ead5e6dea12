/// REST client for the hosted signups table
///
/// Speaks the PostgREST conventions used by the hosted backend:
///
/// - Rows live under `{base_url}/rest/v1/{table}`
/// - The key is sent twice, as `apikey` and as a bearer token
/// - `Prefer: return=minimal` keeps inserts body-less
/// - `Prefer: count=exact` makes reads report the total in `Content-Range`
///
/// No timeout is configured; requests use the client defaults. Nothing is
/// retried.
///
/// # Example
///
/// ```no_run
/// use kinetic_shared::store::{RestStore, SignupStore, StoreConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoreConfig::new("https://db.example.com", "anon-key")
///     .with_table("waitlist_signups");
/// let store = RestStore::new(config)?;
/// println!("{} signups", store.count_all().await?);
/// # Ok(())
/// # }
/// ```

use crate::models::SignupRecord;
use crate::store::{
    parse_total_count, SignupStore, StoreError, StoreResult, DEFAULT_REJECTION_MESSAGE,
};
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use serde::{Deserialize, Serialize};

/// Table written to when none is configured
pub const DEFAULT_TABLE: &str = "waitlist_signups";

/// Connection settings for the hosted table
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, without a trailing slash
    pub base_url: String,

    /// Anonymous API key
    pub api_key: String,

    /// Table holding signup rows
    pub table: String,
}

impl StoreConfig {
    /// Creates a configuration for the default table
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Overrides the table name
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Full URL of the table endpoint
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

/// HTTP-backed [`SignupStore`]
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    /// Creates a store client
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unreachable` if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("kinetic-waitlist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Unreachable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }
}

#[async_trait]
impl SignupStore for RestStore {
    async fn create(&self, record: &SignupRecord) -> StoreResult<()> {
        let response = self
            .authorized(self.client.post(self.config.table_url()))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "signup row created");
            return Ok(());
        }

        // An unreadable body still counts as a rejection, just without detail.
        let body = response.bytes().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }

    async fn count_all(&self) -> StoreResult<u64> {
        let response = self
            .authorized(self.client.get(self.config.table_url()))
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        let content_range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        content_range
            .as_deref()
            .and_then(parse_total_count)
            .ok_or(StoreError::MissingCount(content_range))
    }
}

/// Picks a human-readable message out of a rejection body
///
/// Prefers a string `message` field, then a string `error` field, then
/// [`DEFAULT_REJECTION_MESSAGE`]. Non-JSON bodies get the default.
pub fn rejection_message(body: &[u8]) -> String {
    let parsed: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();

    ["message", "error"]
        .into_iter()
        .find_map(|field| parsed.get(field).and_then(|v| v.as_str()))
        .unwrap_or(DEFAULT_REJECTION_MESSAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url() {
        let config = StoreConfig::new("https://db.example.com/", "key");
        assert_eq!(config.table_url(), "https://db.example.com/rest/v1/waitlist_signups");

        let config = config.with_table("beta_signups");
        assert_eq!(config.table_url(), "https://db.example.com/rest/v1/beta_signups");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = StoreConfig::new("https://db.example.com", "super-secret");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_rejection_message_prefers_message_field() {
        let body = br#"{"message": "duplicate key value", "error": "conflict"}"#;
        assert_eq!(rejection_message(body), "duplicate key value");
    }

    #[test]
    fn test_rejection_message_falls_back_to_error_field() {
        let body = br#"{"error": "Invalid API key"}"#;
        assert_eq!(rejection_message(body), "Invalid API key");

        // A non-string message is skipped
        let body = br#"{"message": 42, "error": "bad request"}"#;
        assert_eq!(rejection_message(body), "bad request");
    }

    #[test]
    fn test_rejection_message_default() {
        assert_eq!(rejection_message(b""), DEFAULT_REJECTION_MESSAGE);
        assert_eq!(rejection_message(b"<html>502</html>"), DEFAULT_REJECTION_MESSAGE);
        assert_eq!(rejection_message(b"[1, 2]"), DEFAULT_REJECTION_MESSAGE);
        assert_eq!(rejection_message(br#"{"hint": null}"#), DEFAULT_REJECTION_MESSAGE);
    }
}
