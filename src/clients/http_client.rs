//! The transport/retry executor.
//!
//! [`HttpClient`] owns request construction and execution for one shop:
//!
//! 1. each attempt waits for the [`RateLimiter`] if it asks for a delay
//! 2. the request is sent through the [`Transport`]
//! 3. a failure [`HttpError::is_retryable`] accepts (no response at all, or a
//!    5xx status) is retried once after a fixed hold
//! 4. anything else is terminal: 2xx bodies are written to the
//!    [`Destination`], other statuses become an [`ApiError`], and a body that
//!    failed to arrive after the status line is never re-sent
//!
//! When both attempts fail with retryable errors the call fails with
//! [`HttpError::AttemptsExhausted`], carrying the last failure as its source.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::auth::Credentials;
use crate::clients::errors::{ApiError, EncodingError, ErrorEnvelope, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBuilder};
use crate::clients::http_response::HttpResponse;
use crate::clients::rate_limit::{HeaderRateLimiter, RateLimiter};
use crate::clients::transport::Transport;
use crate::config::ClientConfig;

/// Attempts made per call before giving up.
pub const MAX_ATTEMPTS: u32 = 2;

/// Where a successful response body goes.
pub enum Destination<'a, D> {
    /// Decode the JSON body into this slot. A blank body leaves it untouched.
    Json(&'a mut D),
    /// Copy the raw body bytes into this sink.
    Raw(&'a mut (dyn Write + Send)),
    /// Ignore the body.
    Discard,
}

/// Executes requests against a single WooCommerce site.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` whenever its transport is, so one client can
/// serve concurrent tasks.
#[derive(Debug)]
pub struct HttpClient<T> {
    transport: T,
    request_builder: RequestBuilder,
    rate_limiter: Arc<dyn RateLimiter>,
    retry_hold: Duration,
}

impl<T: Transport> HttpClient<T> {
    /// Creates a client for `config` sending through `transport`.
    ///
    /// The client starts with a [`HeaderRateLimiter`].
    #[must_use]
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            transport,
            request_builder: RequestBuilder::new(config),
            rate_limiter: Arc::new(HeaderRateLimiter::new()),
            retry_hold: config.retry_hold(),
        }
    }

    /// Replaces the rate limiter.
    pub fn set_rate_limiter(&mut self, rate_limiter: Arc<dyn RateLimiter>) {
        self.rate_limiter = rate_limiter;
    }

    /// Installs credentials for every subsequent request.
    pub fn set_credentials(&mut self, credentials: &Credentials) {
        self.request_builder.set_credentials(credentials);
    }

    /// Returns the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.request_builder.base_url()
    }

    /// Returns the request builder.
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.request_builder
    }

    /// Returns the rate limiter.
    #[must_use]
    pub fn rate_limiter(&self) -> &Arc<dyn RateLimiter> {
        &self.rate_limiter
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds a request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encoding`] if the query or body cannot be serialized.
    pub fn build_request<Q, B>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<HttpRequest, HttpError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        Ok(self.request_builder.build(method, path, query, body)?)
    }

    /// Executes `request` with bounded retry, writing a 2xx body to `destination`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Api`] for a terminal non-2xx response
    /// - [`HttpError::Encoding`] if a 2xx body cannot be decoded or written
    /// - [`HttpError::Transport`] with
    ///   [`TransportError::Body`](crate::clients::TransportError::Body) if the body
    ///   failed to arrive after the status line; this is never retried
    /// - [`HttpError::AttemptsExhausted`] if every attempt failed with a
    ///   transport error or a 5xx response
    pub async fn execute<D: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        destination: Destination<'_, D>,
    ) -> Result<HttpResponse, HttpError> {
        let mut last_error = None;

        for attempt in 1..=MAX_ATTEMPTS {
            if let Some(delay) = self.rate_limiter.delay_before_send() {
                tracing::debug!(
                    url = %request.url,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "Waiting for rate limit window"
                );
                tokio::time::sleep(delay).await;
            }

            tracing::debug!(
                method = %request.method,
                url = %request.url,
                attempt,
                "Sending WooCommerce API request"
            );

            let error = match self.transport.send(request).await {
                Ok(response) => {
                    self.rate_limiter.update(&response.headers);
                    if response.is_ok() {
                        return Self::deliver(response, destination);
                    }
                    HttpError::Api(api_error(request, &response))
                }
                Err(error) => HttpError::Transport(error),
            };

            if !error.is_retryable() {
                tracing::debug!(
                    method = %request.method,
                    url = %request.url,
                    error = %error,
                    "WooCommerce API request failed"
                );
                return Err(error);
            }

            if attempt < MAX_ATTEMPTS {
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    attempt,
                    error = %error,
                    "Retrying WooCommerce API request"
                );
                tokio::time::sleep(self.retry_hold).await;
            }
            last_error = Some(error);
        }

        Err(HttpError::AttemptsExhausted {
            attempts: MAX_ATTEMPTS,
            last: last_error.map(Box::new),
        })
    }

    /// Executes `request` and ignores the response body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        self.execute::<IgnoredAny>(request, Destination::Discard)
            .await
    }

    fn deliver<D: DeserializeOwned>(
        response: HttpResponse,
        destination: Destination<'_, D>,
    ) -> Result<HttpResponse, HttpError> {
        match destination {
            Destination::Json(slot) => {
                if !response.is_body_blank() {
                    *slot = serde_json::from_slice(&response.body).map_err(EncodingError::Decode)?;
                }
            }
            Destination::Raw(sink) => {
                sink.write_all(&response.body)
                    .and_then(|()| sink.flush())
                    .map_err(EncodingError::Sink)?;
            }
            Destination::Discard => {}
        }

        Ok(response)
    }
}

fn api_error(request: &HttpRequest, response: &HttpResponse) -> ApiError {
    ApiError::new(
        request.method,
        request.url.clone(),
        response.code,
        ErrorEnvelope::from_body(&response.body),
    )
}
