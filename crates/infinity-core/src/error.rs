//! Error types for the Infinity configuration client.
//!
//! This module provides a unified error type with explicit variants for
//! cancellation, timeouts, transport failures, server-reported errors,
//! codec failures and input validation errors. Every error is returned to
//! the caller unchanged; nothing in the library retries.

use std::fmt;
use thiserror::Error;

/// Boxed underlying cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The unified error type for Infinity client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller's context was cancelled before the operation completed.
    #[error("request cancelled")]
    Cancelled,

    /// The per-request deadline expired.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Network-level failure (DNS, connect, TLS, premature close).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status of 400 or above.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Input validation errors (bad base URL, unsupported operation, ...).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if the caller's context was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Returns true if the request deadline expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns the server error, if this is one.
    pub fn as_server_error(&self) -> Option<&ServerError> {
        match self {
            Error::Server(err) => Some(err),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connecting to the server failed (DNS, TCP, TLS handshake).
    #[error("connection failed: {source}")]
    Connect {
        #[source]
        source: BoxError,
    },

    /// Sending the request failed.
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: BoxError,
    },

    /// Reading the response body failed.
    #[error("failed to read response body: {source}")]
    Body {
        #[source]
        source: BoxError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: BoxError,
    },
}

/// An HTTP response with status 400 or above.
///
/// The body is kept verbatim (lossily decoded as UTF-8 and capped at the
/// transport's configured size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// HTTP method of the failed request.
    pub method: String,
    /// Relative endpoint of the failed request.
    pub endpoint: String,
    /// Response body as returned by the server.
    pub body: String,
}

impl ServerError {
    /// Create a new server error.
    pub fn new(
        status: u16,
        method: impl Into<String>,
        endpoint: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status,
            method: method.into(),
            endpoint: endpoint.into(),
            body: body.into(),
        }
    }

    /// The body parsed as JSON, when the server sent JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Check if the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if this is a 4xx response.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if this is a 5xx response.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {} {}", self.status, self.method, self.endpoint)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// A 2xx response whose body did not match the expected JSON shape.
#[derive(Debug, Error)]
#[error("{source} (body: {body:?})")]
pub struct DecodeError {
    /// The raw body, kept for diagnostics.
    pub body: String,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Create a decode error from the raw body bytes.
    pub fn new(body: &[u8], source: serde_json::Error) -> Self {
        Self {
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid timestamp.
    #[error("invalid timestamp '{value}': {reason}")]
    Timestamp { value: String, reason: String },

    /// The resource kind is not in the catalogue.
    #[error("unknown resource kind '{kind}'")]
    UnknownKind { kind: String },

    /// The resource kind does not support the requested operation.
    #[error("resource kind '{kind}' does not support {operation}")]
    Unsupported {
        kind: String,
        operation: &'static str,
    },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
