//! Storage module for the parity check history.
//!
//! This module provides abstractions for history storage via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Input validation                                     │
//! │  - Parity evaluation                                    │
//! │  - Percentages and paging                               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is no process-wide repository instance: the server binary builds
//! one and hands it to the HTTP state, and tests build their own.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{ErrorContext, HistoryRepository, RepositoryError, RepositoryResult};

use std::sync::Arc;

/// Create a shared in-memory repository.
pub fn create_local_repository() -> Arc<dyn HistoryRepository> {
    Arc::new(LocalRepository::new())
}
