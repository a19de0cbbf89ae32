//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::db::HistoryRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// History store shared by every request
    pub repository: Arc<dyn HistoryRepository>,
    /// Resolved server settings
    pub config: Arc<ServerConfig>,
    /// When the state was built; health reports uptime from here
    pub started_at: Instant,
}

impl AppState {
    /// Create a new application state with the given repository and settings.
    pub fn new(repository: Arc<dyn HistoryRepository>, config: ServerConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the state was created.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
