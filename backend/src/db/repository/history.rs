//! History repository trait for parity check records.
//!
//! This trait is the seam between the service layer and storage. The only
//! backend today is the in-memory [`LocalRepository`](crate::db::LocalRepository),
//! but a persistent variant can be added by implementing the same trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{CheckRecord, HistoryStats, Parity};

/// Repository trait for the append-only check history.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append a new check record.
    ///
    /// Assigns the next sequential id and stamps the current time.
    ///
    /// # Arguments
    /// * `value` - The integer that was checked
    /// * `parity` - Its parity
    ///
    /// # Returns
    /// * `Ok(CheckRecord)` - The stored record
    /// * `Err(RepositoryError)` - If the record cannot be stored
    async fn append(&self, value: i64, parity: Parity) -> RepositoryResult<CheckRecord>;

    /// Fetch the most recent records, newest first.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of records; `None` or `Some(0)` use
    ///   [`DEFAULT_HISTORY_LIMIT`](crate::api::DEFAULT_HISTORY_LIMIT)
    async fn recent(&self, limit: Option<usize>) -> RepositoryResult<Vec<CheckRecord>>;

    /// Aggregate counts and the last appended record.
    async fn stats(&self) -> RepositoryResult<HistoryStats>;

    /// Remove every record and restart id assignment at 1.
    async fn clear(&self) -> RepositoryResult<()>;

    /// Find the earliest record for `value`, if any.
    async fn find_by_value(&self, value: i64) -> RepositoryResult<Option<CheckRecord>>;

    /// Snapshot of the whole history in insertion order.
    async fn all(&self) -> RepositoryResult<Vec<CheckRecord>>;
}
