//! Repository implementations module.
//!
//! This module contains the implementations of the `HistoryRepository` trait:
//! - `local`: In-memory implementation used by the server and in tests
pub mod local;

pub use local::LocalRepository;
