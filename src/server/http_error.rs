//! HTTP Error Shaping
//!
//! Maps [`CatalogError`] onto the wire contract:
//!
//! - `Validation` → 400 `{"errors": [{"field", "message"}, ..]}`
//! - `NotFound` → 404 `{"error": "<Entity> not found"}`
//! - `Store` → 500 `{"error": "<fixed operation message>"}`
//!
//! Store failures are logged here, at the handler boundary, with the
//! operation's fixed message as context. Raw error detail never reaches the
//! client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::services::{CatalogError, ValidationIssue};

/// Client-facing error response
#[derive(Debug)]
pub enum ApiError {
    /// 400 with the accumulated issue list
    Validation(Vec<ValidationIssue>),
    /// 404 with a fixed single-field message
    NotFound(String),
    /// 500 with a fixed operation-specific message
    Internal(&'static str),
}

impl ApiError {
    /// Map a service error, using `operation_message` as the fixed 500 body
    /// for store failures
    pub fn from_catalog(err: CatalogError, operation_message: &'static str) -> Self {
        match err {
            CatalogError::Validation(issues) => Self::Validation(issues),
            CatalogError::NotFound { entity } => Self::NotFound(format!("{entity} not found")),
            CatalogError::Store(source) => {
                tracing::error!("{}: {:?}", operation_message, source);
                Self::Internal(operation_message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(issues) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": issues }))).into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
