//! # Parity API Backend
//!
//! A small REST service that classifies integers as even or odd, records
//! every check in an in-memory history and reports history and statistics.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: The parity evaluator
//! - [`api`]: Records and result types shared by every layer
//! - [`db`]: Repository trait and the in-memory history store
//! - [`services`]: Check, history and statistics pipelines
//! - [`config`]: Server settings from defaults, TOML file and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```ignore
//! use parity_api::{db, services};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = db::LocalRepository::new();
//!     let result = services::check_parity(&repo, &serde_json::json!(42)).await?;
//!     assert!(result.is_even);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
