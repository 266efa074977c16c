//! Error types for the store and the HTTP layer.
//!
//! `StoreError` covers persistence failures. `AppError` is what handlers
//! return; it maps onto the status codes the API promises (400/404) and
//! renders a problem-details body. Store failures become 500 with a fixed
//! detail so internals never leak to clients.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by an `ItemStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store connection lock poisoned")]
    Poisoned,

    #[error("blocking store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, null or undecodable body, or a body id that disagrees with
    /// the path id.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No item with this id exists.
    #[error("todo item {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// RFC 9457 problem-details body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, slug: &str, detail: impl Into<String>) -> Self {
        Self {
            error_type: format!("about:blank#{slug}"),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status: status.as_u16(),
            detail: detail.into(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::BadRequest(detail) => ErrorResponse::new(status, "bad-request", detail.clone()),
            AppError::NotFound(_) => ErrorResponse::new(status, "not-found", self.to_string()),
            AppError::Store(source) => {
                tracing::error!(error = %source, "store operation failed");
                ErrorResponse::new(status, "internal-error", "internal server error")
            }
        };
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}

/// Startup and serve failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
