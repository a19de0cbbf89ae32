//! HTTP error handling.
//!
//! Every failure is rendered as an [`ApiResponse`] envelope. Internal and
//! repository failures are logged in full but only a generic message is
//! returned to the caller.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tracing::{error, warn};

use super::dto::{ApiResponse, FieldError};
use crate::db::RepositoryError;
use crate::services::ServiceError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// One or more request fields were rejected
    Validation {
        message: String,
        details: Vec<FieldError>,
    },
    /// Malformed request (bad content type, unparsable JSON)
    BadRequest(String),
    /// No route matches the request path
    NotFound(String),
    /// The path exists but not for this method
    MethodNotAllowed(String),
    /// An extractor rejected the request with its own status
    Rejected { status: StatusCode, message: String },
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    /// Validation failure for a single field.
    pub fn field(error: FieldError) -> Self {
        AppError::Validation {
            message: VALIDATION_FAILED.to_string(),
            details: vec![error],
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Rejected { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
                RepositoryError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                RepositoryError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation { message, details } => {
                ApiResponse::error(status, message, Some(details))
            }
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::Rejected { message: msg, .. } => {
                if status.is_server_error() {
                    error!("Request failed: {}", msg);
                } else {
                    warn!("Request rejected: {}", msg);
                }
                ApiResponse::error(status, msg, None)
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                ApiResponse::error(status, UNEXPECTED_ERROR, None)
            }
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { message, .. }
                | RepositoryError::ValidationError { message, .. } => {
                    ApiResponse::error(status, message, None)
                }
                RepositoryError::InternalError { .. } => {
                    error!("Repository error: {}", e);
                    ApiResponse::error(status, INTERNAL_ERROR, None)
                }
            },
        };

        body.into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(field) => AppError::field(field),
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Content-Type must be application/json".to_string())
            }
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                AppError::BadRequest("Invalid JSON format".to_string())
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

/// Convert a handler panic into the generic 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ErrorContext;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::field(FieldError::new("number", "bad", 1)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed("x".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Repository(RepositoryError::internal("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Repository(RepositoryError::validation("x")).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_service_validation_becomes_field_error() {
        let err: AppError = ServiceError::Validation(FieldError::new("number", "bad", "x")).into();
        match err {
            AppError::Validation { message, details } => {
                assert_eq!(message, VALIDATION_FAILED);
                assert_eq!(details[0].field, "number");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_internal_repository_error_is_generic() {
        let err = AppError::Repository(RepositoryError::internal_with_context(
            "secret detail",
            ErrorContext::new("append"),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_handler_status() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
