/// Signup store abstraction
///
/// The waitlist table lives in a hosted PostgREST-style service. Handlers
/// only ever need two things from it, so the contract is kept that narrow:
///
/// ```text
/// SignupStore
///   ├─> create(record)   one insert, no retry
///   └─> count_all()      exact row count
/// ```
///
/// # Implementations
///
/// - [`RestStore`]: talks to the hosted table over HTTP
/// - [`MemoryStore`]: in-process store for tests and local runs
///
/// # Example
///
/// ```no_run
/// use kinetic_shared::models::SignupRecord;
/// use kinetic_shared::store::{RestStore, SignupStore, StoreConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = RestStore::new(StoreConfig::new("https://db.example.com", "anon-key"))?;
///
/// store.create(&SignupRecord::new("a@b.com", None)?).await?;
/// let total = store.count_all().await?;
/// println!("{} signups", total);
/// # Ok(())
/// # }
/// ```

pub mod content_range;
pub mod memory;
pub mod rest;

use crate::models::SignupRecord;
use async_trait::async_trait;
use thiserror::Error;

pub use content_range::parse_total_count;
pub use memory::MemoryStore;
pub use rest::{RestStore, StoreConfig};

/// Message used when the store rejects a write without saying why
pub const DEFAULT_REJECTION_MESSAGE: &str = "Unable to submit waitlist request.";

/// Store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered with a non-success status
    #[error("store rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status returned by the store
        status: u16,

        /// Message extracted from the response body
        message: String,
    },

    /// The request never produced a usable response
    #[error("store unreachable: {0}")]
    Unreachable(String),

    /// A count response carried no parseable total
    #[error("store response had no usable count: {0:?}")]
    MissingCount(Option<String>),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Write/count access to the signups table
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Inserts one record
    ///
    /// Single attempt. Two calls with the same record are two inserts.
    async fn create(&self, record: &SignupRecord) -> StoreResult<()>;

    /// Returns the exact number of rows in the table
    async fn count_all(&self) -> StoreResult<u64>;
}
