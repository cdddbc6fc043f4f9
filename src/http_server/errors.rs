//! HTTP API errors
//!
//! Every failure leaves the server as `{"error": <message>, "code": <status>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing or ill-typed query-string parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Nothing in the table to answer with
    #[error("{0}")]
    Query(#[from] QueryError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The dataset failed to load at startup
    #[error("Dataset unavailable")]
    DatasetUnavailable,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::NOT_FOUND,
            ApiError::DatasetUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
