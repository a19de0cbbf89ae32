//! Statistics query pipeline.

use log::error;

use super::error::ServiceResult;
use crate::api::ParityStats;
use crate::db::HistoryRepository;

/// Totals, per-parity counts and percentages over the whole history.
pub async fn get_stats(repository: &dyn HistoryRepository) -> ServiceResult<ParityStats> {
    let stats = repository.stats().await.map_err(|e| {
        error!("Error in get_stats: {}", e);
        e
    })?;

    Ok(ParityStats::from(stats))
}
