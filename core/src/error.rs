//! Error types for the store clients.
//!
//! # Design
//! `NotFound` and `Conflict` get dedicated variants because callers branch
//! on them. Every other unexpected status lands in `HttpError` with the raw
//! status code and body.

use thiserror::Error;

/// Errors returned by the store client `parse_*` and `build_*` methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store returned 404.
    #[error("resource not found")]
    NotFound,

    /// The store returned 409: a unique field is already taken.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The store returned a status other than the expected one, 404 or 409.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// A request URL could not be built from the configured base URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
