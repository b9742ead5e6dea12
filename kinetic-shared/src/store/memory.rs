/// In-memory signup store
///
/// Keeps rows in a `Vec` behind a mutex. Useful for:
/// - Testing handlers without network access
/// - Running the server locally without a hosted table
///
/// Failures can be injected to exercise the error paths: a store built with
/// [`MemoryStore::failing`] answers every call with the given error and
/// records nothing.
///
/// # Example
///
/// ```
/// use kinetic_shared::models::SignupRecord;
/// use kinetic_shared::store::{MemoryStore, SignupStore};
///
/// # async fn example() {
/// let store = MemoryStore::new();
/// let record = SignupRecord::new("a@b.com", None).unwrap();
///
/// store.create(&record).await.unwrap();
/// store.create(&record).await.unwrap();
///
/// assert_eq!(store.count_all().await.unwrap(), 2);
/// # }
/// ```

use crate::models::SignupRecord;
use crate::store::{SignupStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Vec-backed [`SignupStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SignupRecord>>,
    failure: Option<StoreError>,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that fails every call with `error`
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Returns a copy of every stored record, in insertion order
    pub async fn records(&self) -> Vec<SignupRecord> {
        self.records.lock().await.clone()
    }

    /// Number of `create`/`count_all` calls received, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SignupStore for MemoryStore {
    async fn create(&self, record: &SignupRecord) -> StoreResult<()> {
        self.check_failure()?;
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn count_all(&self) -> StoreResult<u64> {
        self.check_failure()?;
        Ok(self.records.lock().await.len() as u64)
    }
}
