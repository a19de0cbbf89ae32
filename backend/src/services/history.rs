//! History query pipeline.

use log::error;

use super::error::{FieldError, ServiceResult};
use crate::api::{HistoryPage, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use crate::db::HistoryRepository;

pub const INVALID_LIMIT: &str = "Limit must be an integer between 1 and 100";

/// Resolve the limit actually applied to a history query.
///
/// Missing or non-positive values fall back to the default; larger values
/// are clamped to [`MAX_HISTORY_LIMIT`].
pub fn effective_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(n) if n > 0 => (n as u64).min(MAX_HISTORY_LIMIT as u64) as usize,
        _ => DEFAULT_HISTORY_LIMIT,
    }
}

/// Validate a `limit` query parameter as received on the wire.
///
/// Absent or empty parameters are accepted as `None`. Anything else must be
/// an integer in `1..=100`.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, FieldError> {
    let raw = match raw {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(n) if (1..=MAX_HISTORY_LIMIT as i64).contains(&n) => Ok(Some(n)),
        _ => Err(FieldError::new("limit", INVALID_LIMIT, raw)),
    }
}

/// Most recent checks, newest first, with the effective limit.
pub async fn get_history(
    repository: &dyn HistoryRepository,
    limit: Option<i64>,
) -> ServiceResult<HistoryPage> {
    let limit = effective_limit(limit);
    let history = repository.recent(Some(limit)).await.map_err(|e| {
        error!("Error in get_history: {}", e);
        e
    })?;

    Ok(HistoryPage {
        count: history.len(),
        history,
        limit,
    })
}
