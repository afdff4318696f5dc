//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::services::occupancy::OccupancyError;
use crate::services::AnalyticsError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
    Repository(RepositoryError),
    Occupancy(OccupancyError),
    Analytics(AnalyticsError),
}

fn occupancy_response(err: OccupancyError) -> (StatusCode, ApiError) {
    match err {
        OccupancyError::InvalidInterval { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new("INVALID_INTERVAL", err.to_string()),
        ),
        OccupancyError::InvalidWindow(_) => (
            StatusCode::BAD_REQUEST,
            ApiError::new("INVALID_WINDOW", err.to_string()),
        ),
    }
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => {
                let details = e.context().to_string();
                let (status, code) = match e {
                    RepositoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    RepositoryError::ValidationError { .. } => {
                        (StatusCode::BAD_REQUEST, "INVALID_DATASET")
                    }
                };
                (status, ApiError::new(code, e.to_string()).with_details(details))
            }
            AppError::Occupancy(e) => occupancy_response(e),
            AppError::Analytics(e) => match e {
                AnalyticsError::DriverNotFound(_) => {
                    (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", e.to_string()))
                }
                AnalyticsError::InvalidDateRange { .. } | AnalyticsError::InvalidPeriod(_) => {
                    (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", e.to_string()))
                }
                AnalyticsError::Occupancy(inner) => occupancy_response(inner),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!("{}: {}", error.code, error.message);
        }
        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<OccupancyError> for AppError {
    fn from(err: OccupancyError) -> Self {
        AppError::Occupancy(err)
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        AppError::Analytics(err)
    }
}
