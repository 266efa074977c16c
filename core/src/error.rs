//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because they are the
//! two failures the server reports on purpose. Any other unexpected status
//! lands in `HttpError` with the raw status code and body for debugging.
//! `Transport` covers the case where no response arrived at all.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and by `TodoGateway` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400; the body was absent, malformed, or its id did
    /// not match the path.
    #[error("bad request: {body}")]
    BadRequest { body: String },

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
