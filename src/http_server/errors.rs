//! # HTTP API Errors
//!
//! Error types for the catalog endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog queries
pub type ApiResult<T> = Result<T, ApiError>;

/// Catalog API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No bakery row matches the requested id
    #[error("bakery not found: {0}")]
    BakeryNotFound(i64),

    /// The baked_goods table is empty, so there is no most expensive row
    #[error("no baked goods recorded")]
    NoBakedGoods,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage collaborator failure
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BakeryNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoBakedGoods => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
