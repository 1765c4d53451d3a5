//! HTTP client types for WooCommerce API communication.
//!
//! This module provides the layer between typed resource operations and the
//! network: request construction, the transport seam, bounded retry, rate-limit
//! tracking and response interpretation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: the entry point, handing out resource services
//! - [`HttpClient`]: the executor; one logical call, at most [`MAX_ATTEMPTS`] sends
//! - [`HttpRequest`] / [`RequestBuilder`]: fully resolved requests
//! - [`HttpResponse`]: status, lowercased headers, body, page totals
//! - [`Transport`]: the network seam, with [`ReqwestTransport`] as default
//! - [`RateLimiter`]: consulted before each send, updated after each response
//! - [`HttpError`]: everything a call can fail with
//!
//! # Retry Behavior
//!
//! - **Transport failure** (timeout, refused connection, reset): retried
//! - **5xx**: retried
//! - **Any other status**: returned immediately; non-2xx becomes an [`ApiError`]
//!
//! Between attempts the executor holds for
//! [`ClientConfig::retry_hold`](crate::config::ClientConfig::retry_hold)
//! (one second by default). There is no backoff or jitter.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::{Destination, HttpMethod, RestClient};
//!
//! let client = RestClient::new("https://shop.example.com")?;
//! let http = client.http_client();
//!
//! let request = http.build_request::<(), ()>(HttpMethod::Get, "settings", None, None)?;
//! let mut groups = serde_json::Value::Null;
//! http.execute(&request, Destination::Json(&mut groups)).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;
pub mod rest;
mod transport;

pub use errors::{ApiError, EncodingError, ErrorData, ErrorEnvelope, HttpError, TransportError};
pub use http_client::{Destination, HttpClient, MAX_ATTEMPTS};
pub use http_request::{
    encode_query, HttpMethod, HttpRequest, RequestBuilder, JSON_CONTENT_TYPE, SDK_VERSION,
};
pub use http_response::{parse_header_map, HttpResponse, PaginationInfo};
pub use rate_limit::{
    HeaderRateLimiter, NoopRateLimiter, RateLimit, RateLimiter, EPOCH_RESET_THRESHOLD,
};
pub use transport::{ReqwestTransport, Transport};

pub use rest::RestClient;
