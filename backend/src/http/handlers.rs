//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. Handlers only check the
//! shape of the request and delegate to the service layer.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{Method, Uri},
    Json,
};
use serde_json::Value;
use tracing::debug;

use super::dto::{
    ApiResponse, CheckQuery, EndpointMap, FieldError, HealthResponse, HistoryQuery,
    HistoryResponse, ParityResult, ServiceInfo, StatsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<ApiResponse<T>, AppError>;

pub const SERVICE_NAME: &str = "Parity API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Landing & Health
// =============================================================================

/// GET /
///
/// Service description and the list of endpoints.
pub async fn root(State(state): State<AppState>) -> HandlerResult<ServiceInfo> {
    let config = &state.config;

    Ok(ApiResponse::success(
        ServiceInfo {
            message: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: "Determines whether an integer is even or odd".to_string(),
            endpoints: EndpointMap {
                health: config.route("/health"),
                check_parity: config.route("/check"),
                check_parity_query: format!("{}?number=X", config.route("/check-query")),
                history: config.route("/history"),
                stats: config.route("/stats"),
            },
        },
        "Welcome to Parity API",
    ))
}

/// GET /parity/health
///
/// Static service identity plus process uptime. Does not touch the store.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(ApiResponse::success(
        HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            uptime: state.uptime_secs(),
        },
        "Service is healthy",
    ))
}

// =============================================================================
// Parity checks
// =============================================================================

/// POST /parity/check
///
/// Check the `number` field of a JSON body.
pub async fn check_parity(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<ParityResult> {
    let Json(body) = payload?;

    let number = match body.get("number") {
        None | Some(Value::Null) => {
            return Err(AppError::field(FieldError::new(
                "number",
                "Number is required",
                Value::Null,
            )))
        }
        Some(number) => number,
    };

    debug!("Checking parity of {}", number);
    let result = services::check_parity(state.repository.as_ref(), number).await?;

    Ok(ApiResponse::success(result, "Parity checked successfully"))
}

/// GET /parity/check-query?number=N
///
/// Check a number passed as a query parameter.
pub async fn check_parity_query(
    State(state): State<AppState>,
    query: Result<Query<CheckQuery>, QueryRejection>,
) -> HandlerResult<ParityResult> {
    let Query(query) = query?;

    let number = match query.number {
        Some(number) if !number.is_empty() => number,
        other => {
            return Err(AppError::field(FieldError::new(
                "number",
                "Number query parameter is required",
                other.map(Value::String).unwrap_or(Value::Null),
            )))
        }
    };

    debug!("Checking parity of query value {:?}", number);
    let result =
        services::check_parity(state.repository.as_ref(), &Value::String(number)).await?;

    Ok(ApiResponse::success(result, "Parity checked successfully"))
}

// =============================================================================
// Queries
// =============================================================================

/// GET /parity/history?limit=N
///
/// Most recent checks, newest first.
pub async fn get_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> HandlerResult<HistoryResponse> {
    let Query(query) = query?;
    let limit = services::parse_limit(query.limit.as_deref()).map_err(AppError::field)?;

    let page = services::get_history(state.repository.as_ref(), limit).await?;

    Ok(ApiResponse::success(
        HistoryResponse::from(page),
        "History retrieved successfully",
    ))
}

/// GET /parity/stats
///
/// Totals and percentages over the whole history.
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<StatsResponse> {
    let stats = services::get_stats(state.repository.as_ref()).await?;

    Ok(ApiResponse::success(
        StatsResponse::from(stats),
        "Statistics retrieved successfully",
    ))
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Any path without a route.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} {} not found", method, uri.path()))
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {} not allowed for {}", method, uri.path()))
}
