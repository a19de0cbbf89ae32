//! Data Transfer Objects for the HTTP API.
//!
//! Every response body is an [`ApiResponse`] envelope. Domain results from
//! the service layer are re-exported or wrapped in camelCase DTOs here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub use crate::api::{CheckRecord, HistoryPage, ParityResult, ParityStats, Percentage};
pub use crate::services::FieldError;
use crate::api::{iso_millis, CheckId, Parity};

/// Uniform response envelope for success and failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Rejected fields, present on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 200 response carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: message.into(),
            data: Some(data),
            details: None,
            timestamp: now_iso(),
        }
    }
}

impl ApiResponse<()> {
    /// Error envelope without data.
    pub fn error(
        status: StatusCode,
        message: impl Into<String>,
        details: Option<Vec<FieldError>>,
    ) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            data: None,
            details,
            timestamp: now_iso(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

fn now_iso() -> String {
    iso_millis::format(&chrono::Utc::now())
}

/// Query parameters for the check-by-query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckQuery {
    #[serde(default)]
    pub number: Option<String>,
}

/// Query parameters for the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryQuery {
    /// Maximum number of records (1-100, default 10)
    #[serde(default)]
    pub limit: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Seconds since the server state was created
    pub uptime: f64,
}

/// History record as rendered by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecordDto {
    pub id: CheckId,
    pub value: i64,
    pub parity: Parity,
    pub is_even: bool,
    pub is_odd: bool,
    pub timestamp: String,
}

impl From<CheckRecord> for CheckRecordDto {
    fn from(record: CheckRecord) -> Self {
        Self {
            id: record.id,
            value: record.value,
            parity: record.parity,
            is_even: record.is_even(),
            is_odd: record.is_odd(),
            timestamp: iso_millis::format(&record.timestamp),
        }
    }
}

/// History page response.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<CheckRecordDto>,
    pub count: usize,
    pub limit: usize,
}

impl From<HistoryPage> for HistoryResponse {
    fn from(page: HistoryPage) -> Self {
        Self {
            history: page.history.into_iter().map(Into::into).collect(),
            count: page.count,
            limit: page.limit,
        }
    }
}

/// Statistics response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_checks: usize,
    pub even_count: usize,
    pub odd_count: usize,
    pub even_percentage: Percentage,
    pub odd_percentage: Percentage,
    pub last_check: Option<CheckRecordDto>,
}

impl From<ParityStats> for StatsResponse {
    fn from(stats: ParityStats) -> Self {
        Self {
            total_checks: stats.total_checks,
            even_count: stats.even_count,
            odd_count: stats.odd_count,
            even_percentage: stats.even_percentage,
            odd_percentage: stats.odd_percentage,
            last_check: stats.last_check.map(Into::into),
        }
    }
}

/// Paths of the public endpoints, listed on the landing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointMap {
    pub health: String,
    pub check_parity: String,
    pub check_parity_query: String,
    pub history: String,
    pub stats: String,
}

/// Landing route response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub description: String,
    pub endpoints: EndpointMap,
}
