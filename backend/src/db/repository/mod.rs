//! Repository trait definitions and error types.

pub mod error;
pub mod history;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use history::HistoryRepository;
