//! In-memory history repository.
//!
//! Records live in a `Vec` behind a single `RwLock` together with the next
//! id, so id assignment and insertion happen atomically and readers always
//! observe a consistent snapshot. Nothing survives a restart.

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;

use crate::api::{CheckId, CheckRecord, HistoryStats, Parity, DEFAULT_HISTORY_LIMIT};
use crate::db::repository::{ErrorContext, HistoryRepository, RepositoryError, RepositoryResult};

#[derive(Debug)]
struct HistoryState {
    records: Vec<CheckRecord>,
    next_id: u64,
}

impl HistoryState {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory, append-only check history.
#[derive(Debug)]
pub struct LocalRepository {
    state: RwLock<HistoryState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HistoryState::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for LocalRepository {
    async fn append(&self, value: i64, parity: Parity) -> RepositoryResult<CheckRecord> {
        let mut state = self.state.write();

        let id = state.next_id;
        state.next_id = id.checked_add(1).ok_or_else(|| {
            RepositoryError::internal_with_context(
                "Check id sequence exhausted",
                ErrorContext::new("append")
                    .with_entity("check_record")
                    .with_entity_id(id),
            )
        })?;

        let record = CheckRecord {
            id: CheckId::new(id),
            value,
            parity,
            timestamp: chrono::Utc::now(),
        };
        state.records.push(record.clone());

        debug!("Stored check record {} ({} is {})", id, value, parity);
        Ok(record)
    }

    async fn recent(&self, limit: Option<usize>) -> RepositoryResult<Vec<CheckRecord>> {
        let limit = match limit {
            Some(n) if n > 0 => n,
            _ => DEFAULT_HISTORY_LIMIT,
        };

        let state = self.state.read();
        Ok(state.records.iter().rev().take(limit).cloned().collect())
    }

    async fn stats(&self) -> RepositoryResult<HistoryStats> {
        let state = self.state.read();
        let even_count = state.records.iter().filter(|r| r.is_even()).count();
        let total_checks = state.records.len();

        Ok(HistoryStats {
            total_checks,
            even_count,
            odd_count: total_checks - even_count,
            last_check: state.records.last().cloned(),
        })
    }

    async fn clear(&self) -> RepositoryResult<()> {
        let mut state = self.state.write();
        let removed = state.records.len();
        *state = HistoryState::new();
        debug!("Cleared {} check records", removed);
        Ok(())
    }

    async fn find_by_value(&self, value: i64) -> RepositoryResult<Option<CheckRecord>> {
        Ok(self
            .state
            .read()
            .records
            .iter()
            .find(|r| r.value == value)
            .cloned())
    }

    async fn all(&self) -> RepositoryResult<Vec<CheckRecord>> {
        Ok(self.state.read().records.clone())
    }
}
