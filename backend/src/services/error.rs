//! Error types shared by the service layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::db::RepositoryError;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// The offending value as received.
    pub value: serde_json::Value,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors produced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The input was rejected before touching the store.
    #[error("Validation failed: {0}")]
    Validation(FieldError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<FieldError> for ServiceError {
    fn from(err: FieldError) -> Self {
        ServiceError::Validation(err)
    }
}
