/// Waitlist operations
///
/// The two operations the landing page needs, independent of HTTP:
///
/// - [`SignupSubmitter`]: validate, normalize, write one row
/// - [`CountFetcher`]: read the total row count, degrading to `None`
///
/// Both take an optional store at construction time. `None` means the
/// deployment is missing store configuration; the operations then answer
/// with `WaitlistError::MissingConfiguration` without touching the network.
///
/// # Example
///
/// ```
/// use kinetic_shared::store::{MemoryStore, SignupStore};
/// use kinetic_shared::waitlist::{CountFetcher, SignupRequest, SignupSubmitter};
/// use std::sync::Arc;
///
/// # async fn example() -> kinetic_shared::error::WaitlistResult<()> {
/// let store: Arc<dyn SignupStore> = Arc::new(MemoryStore::new());
/// let submitter = SignupSubmitter::new(Some(store.clone()));
/// let counter = CountFetcher::new(Some(store));
///
/// submitter.submit(SignupRequest::new("A@B.com", Some("peaking"))).await?;
/// assert_eq!(counter.fetch().await?, Some(1));
/// # Ok(())
/// # }
/// ```

use crate::error::{WaitlistError, WaitlistResult};
use crate::models::SignupRecord;
use crate::store::SignupStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Raw signup input, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    /// Email as typed; `None` if absent or not a string
    pub email: Option<String>,

    /// Stage as typed; `None` if absent or not a string
    pub stage: Option<String>,
}

impl SignupRequest {
    /// Creates a request from form values
    pub fn new(email: impl Into<String>, stage: Option<&str>) -> Self {
        Self {
            email: Some(email.into()),
            stage: stage.map(str::to_string),
        }
    }

    /// Parses a JSON request body
    ///
    /// Only string-typed `email` and `stage` fields are picked up. Any other
    /// value, or a body that is valid JSON but not an object, yields an
    /// empty request, which then fails email validation.
    ///
    /// # Errors
    ///
    /// Returns `WaitlistError::MalformedRequest` if the body is not JSON.
    pub fn from_json(body: &[u8]) -> WaitlistResult<Self> {
        let value: JsonValue =
            serde_json::from_slice(body).map_err(|_| WaitlistError::MalformedRequest)?;

        let string_field = |name: &str| value.get(name).and_then(JsonValue::as_str).map(str::to_string);

        Ok(Self {
            email: string_field("email"),
            stage: string_field("stage"),
        })
    }
}

/// Validates signups and writes them to the store
#[derive(Clone)]
pub struct SignupSubmitter {
    store: Option<Arc<dyn SignupStore>>,
}

impl SignupSubmitter {
    /// Creates a submitter; `None` means the store is not configured
    pub fn new(store: Option<Arc<dyn SignupStore>>) -> Self {
        Self { store }
    }

    /// Validates the request and issues a single create
    ///
    /// Validation runs before the configuration check, so a bad email is
    /// reported as such even on a misconfigured deployment. There is no
    /// dedup: submitting the same email twice writes twice.
    ///
    /// # Errors
    ///
    /// - `InvalidEmail`: email missing or malformed (no write attempted)
    /// - `MissingConfiguration`: no store (no write attempted)
    /// - `UpstreamRejected` / `UpstreamUnreachable`: the write failed
    pub async fn submit(&self, request: SignupRequest) -> WaitlistResult<SignupRecord> {
        let record = SignupRecord::new(
            request.email.as_deref().unwrap_or_default(),
            request.stage.as_deref(),
        )?;

        let store = self.store.as_ref().ok_or(WaitlistError::MissingConfiguration)?;

        store.create(&record).await.map_err(|err| {
            tracing::warn!(error = %err, "waitlist signup write failed");
            WaitlistError::from(err)
        })?;

        tracing::info!(stage = ?record.stage, "waitlist signup recorded");
        Ok(record)
    }
}

/// Reads the total number of signups
#[derive(Clone)]
pub struct CountFetcher {
    store: Option<Arc<dyn SignupStore>>,
}

impl CountFetcher {
    /// Creates a fetcher; `None` means the store is not configured
    pub fn new(store: Option<Arc<dyn SignupStore>>) -> Self {
        Self { store }
    }

    /// Returns the total, or `None` when the store could not provide one
    ///
    /// Upstream failures are logged and swallowed. `Some(0)` and `None` are
    /// different answers: an empty table versus an unknown total.
    ///
    /// # Errors
    ///
    /// Returns `WaitlistError::MissingConfiguration` when no store is
    /// configured.
    pub async fn fetch(&self) -> WaitlistResult<Option<u64>> {
        let store = self.store.as_ref().ok_or(WaitlistError::MissingConfiguration)?;

        match store.count_all().await {
            Ok(count) => Ok(Some(count)),
            Err(err) => {
                tracing::warn!(error = %err, "waitlist count unavailable");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    fn submitter_with(store: &Arc<MemoryStore>) -> SignupSubmitter {
        SignupSubmitter::new(Some(store.clone() as Arc<dyn SignupStore>))
    }

    #[test]
    fn test_request_from_json() {
        let request = SignupRequest::from_json(br#"{"email": "a@b.com", "stage": "peaking"}"#).unwrap();
        assert_eq!(request, SignupRequest::new("a@b.com", Some("peaking")));
    }

    #[test]
    fn test_request_ignores_non_string_fields() {
        let request = SignupRequest::from_json(br#"{"email": 42, "stage": ["x"]}"#).unwrap();
        assert_eq!(request, SignupRequest::default());

        let request = SignupRequest::from_json(br#""a@b.com""#).unwrap();
        assert_eq!(request, SignupRequest::default());
    }

    #[test]
    fn test_request_rejects_invalid_json() {
        assert_eq!(
            SignupRequest::from_json(b"{email: a@b.com"),
            Err(WaitlistError::MalformedRequest)
        );
        assert_eq!(SignupRequest::from_json(b""), Err(WaitlistError::MalformedRequest));
    }

    #[tokio::test]
    async fn test_submit_normalizes_before_write() {
        let store = Arc::new(MemoryStore::new());
        let submitter = submitter_with(&store);

        submitter
            .submit(SignupRequest::new("  User@Example.COM ", Some("   ")))
            .await
            .unwrap();

        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "user@example.com");
        assert_eq!(records[0].stage, None);
        assert_eq!(records[0].source, "website");
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_store() {
        let store = Arc::new(MemoryStore::new());
        let submitter = submitter_with(&store);

        for email in ["", "no-at-sign.com", "user@nodot", "a@b."] {
            let result = submitter.submit(SignupRequest::new(email, None)).await;
            assert_eq!(result, Err(WaitlistError::InvalidEmail), "{email:?}");
        }

        let result = submitter.submit(SignupRequest::default()).await;
        assert_eq!(result, Err(WaitlistError::InvalidEmail));

        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email_reported_before_missing_configuration() {
        let submitter = SignupSubmitter::new(None);

        let result = submitter.submit(SignupRequest::new("nope", None)).await;
        assert_eq!(result, Err(WaitlistError::InvalidEmail));

        let result = submitter.submit(SignupRequest::new("a@b.com", None)).await;
        assert_eq!(result, Err(WaitlistError::MissingConfiguration));
    }

    #[tokio::test]
    async fn test_duplicate_submissions_write_twice() {
        let store = Arc::new(MemoryStore::new());
        let submitter = submitter_with(&store);

        submitter.submit(SignupRequest::new("a@b.com", None)).await.unwrap();
        submitter.submit(SignupRequest::new("A@B.COM", None)).await.unwrap();

        assert_eq!(store.records().await.len(), 2);
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn test_submit_surfaces_rejection() {
        let store = Arc::new(MemoryStore::failing(StoreError::Rejected {
            status: 409,
            message: "duplicate key value".to_string(),
        }));
        let submitter = submitter_with(&store);

        let result = submitter.submit(SignupRequest::new("a@b.com", None)).await;
        assert_eq!(
            result,
            Err(WaitlistError::UpstreamRejected {
                status: 409,
                message: "duplicate key value".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_count() {
        let store = Arc::new(MemoryStore::new());
        let fetcher = CountFetcher::new(Some(store.clone() as Arc<dyn SignupStore>));
        assert_eq!(fetcher.fetch().await, Ok(Some(0)));

        submitter_with(&store)
            .submit(SignupRequest::new("a@b.com", None))
            .await
            .unwrap();
        assert_eq!(fetcher.fetch().await, Ok(Some(1)));
    }

    #[tokio::test]
    async fn test_fetch_count_degrades_to_none() {
        for error in [
            StoreError::Unreachable("connection refused".to_string()),
            StoreError::MissingCount(Some("0-9/*".to_string())),
            StoreError::Rejected {
                status: 503,
                message: "unavailable".to_string(),
            },
        ] {
            let store: Arc<dyn SignupStore> = Arc::new(MemoryStore::failing(error));
            assert_eq!(CountFetcher::new(Some(store)).fetch().await, Ok(None));
        }
    }

    #[tokio::test]
    async fn test_fetch_count_requires_configuration() {
        assert_eq!(
            CountFetcher::new(None).fetch().await,
            Err(WaitlistError::MissingConfiguration)
        );
    }
}
