//! HTTP pipeline error types.
//!
//! Every request goes through the same pipeline, and every failure it can
//! produce is a variant of [`HttpError`]:
//!
//! - [`EncodingError`]: query or body serialization failed, or a successful
//!   response body could not be decoded. Never retried.
//! - [`TransportError`]: the request never produced a response. Retried.
//! - [`ApiError`]: the server answered with a non-2xx status. Retried for 5xx,
//!   surfaced immediately otherwise.
//! - [`HttpError::AttemptsExhausted`]: every attempt failed with a retryable
//!   error. The most recent failure is kept as the source.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::HttpError;
//!
//! match client.orders().get(42).await {
//!     Ok(order) => println!("Order {:?}", order.number),
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("No such order"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status, e.message),
//!     Err(HttpError::AttemptsExhausted { attempts, .. }) => {
//!         println!("Gave up after {attempts} attempts");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// The JSON error body WooCommerce returns with non-2xx responses.
///
/// ```json
/// {"code":"woocommerce_rest_not_found","message":"Invalid ID.","data":{"status":404}}
/// ```
///
/// Decoding is best-effort: a body that does not match this shape yields
/// `ErrorEnvelope::default()`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorEnvelope {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Nested status data.
    pub data: ErrorData,
}

/// The `data` member of an [`ErrorEnvelope`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorData {
    /// HTTP status code echoed by the server.
    pub status: u16,
}

impl ErrorEnvelope {
    /// Decodes an error body, falling back to an empty envelope.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// A non-2xx response from the API.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::{ApiError, HttpMethod};
///
/// let error = ApiError {
///     method: HttpMethod::Get,
///     url: "https://shop.example.com/wp-json/wc/v3/orders/1".to_string(),
///     status: 404,
///     code: "woocommerce_rest_shop_order_invalid_id".to_string(),
///     message: "Invalid ID.".to_string(),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "GET https://shop.example.com/wp-json/wc/v3/orders/1: 404 Invalid ID."
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{method} {url}: {status} {message}")]
pub struct ApiError {
    /// Method of the failed request.
    pub method: HttpMethod,
    /// Absolute URL of the failed request.
    pub url: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// Machine-readable error code from the body, empty if absent.
    pub code: String,
    /// Human-readable message from the body, empty if absent.
    pub message: String,
}

impl ApiError {
    /// Builds an error from a request line, status and best-effort envelope.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>, status: u16, envelope: ErrorEnvelope) -> Self {
        Self {
            method,
            url: url.into(),
            status,
            code: envelope.code,
            message: envelope.message,
        }
    }

    /// Returns `true` for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for 5xx responses.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// A failure below HTTP.
///
/// Every variant except [`Body`](Self::Body) means the request never produced
/// a response. A body failure happens after the server has answered, so the
/// request may already have taken effect.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// A connection could not be established or was dropped.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other error reported by the HTTP library.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The status line arrived but the body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Returns `true` if no response was received, so re-sending is safe.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::Body(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connection(error.to_string())
        } else {
            Self::Network(error)
        }
    }
}

/// A serialization or deserialization failure.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Query parameters could not be serialized.
    #[error("Failed to encode query parameters: {0}")]
    Query(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Body(#[source] serde_json::Error),

    /// A successful response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The raw response body could not be written to its sink.
    #[error("Failed to write response body: {0}")]
    Sink(#[source] std::io::Error),
}

/// Unified error type for every request the client makes.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Encoding or decoding failed.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The transport failed before a response arrived, or while reading it.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Every attempt failed with a retryable error.
    #[error("All {attempts} request attempts were exhausted")]
    AttemptsExhausted {
        /// Number of attempts made.
        attempts: u32,
        /// The most recent retryable failure.
        #[source]
        last: Option<Box<HttpError>>,
    },
}

impl HttpError {
    /// Returns `true` if the pipeline treats this error as transient.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(error) => error.is_retryable(),
            Self::Api(error) => error.is_server_error(),
            Self::Encoding(_) | Self::AttemptsExhausted { .. } => false,
        }
    }

    /// Returns the API error behind this error, looking through exhaustion.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            Self::AttemptsExhausted {
                last: Some(last), ..
            } => last.api_error(),
            _ => None,
        }
    }
}
