//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository. They take the
//! repository as an explicit `&dyn HistoryRepository` argument, validate
//! input, apply the parity rules and shape results.

pub mod check;
pub mod error;
pub mod history;
pub mod stats;

pub use check::{check_number, check_parity, parse_number};
pub use error::{FieldError, ServiceError, ServiceResult};
pub use history::{effective_limit, get_history, parse_limit};
pub use stats::get_stats;

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
