//! The transport seam between the executor and the network.
//!
//! [`HttpClient`](crate::clients::HttpClient) never talks to `reqwest`
//! directly. It sends every attempt through a [`Transport`], which makes the
//! retry policy testable with scripted transports and lets applications plug
//! in their own HTTP stack.

use std::future::Future;
use std::time::Duration;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{parse_header_map, HttpResponse};
use crate::error::ConfigError;

/// Sends a single request attempt.
///
/// Implementations must not retry; retrying is the executor's job. Any
/// response, whatever its status, is `Ok`. `Err` is reserved for failures
/// that produced no complete response. A failure after the status line has
/// arrived must be reported as [`TransportError::Body`] so the executor does
/// not re-send a request the server may already have applied.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response.
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// The default transport, backed by a pooled `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport using rustls, with an optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req_builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = parse_header_map(res.headers());
        let body = res
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_vec();

        Ok(HttpResponse::new(code, headers, body))
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};
