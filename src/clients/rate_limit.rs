//! Rate-limit tracking.
//!
//! The executor asks its [`RateLimiter`] for a delay before every send and
//! hands it the response headers after every response. The default
//! [`HeaderRateLimiter`] tracks the `X-RateLimit-*` and `Retry-After` headers
//! that WooCommerce (and rate-limiting plugins in front of it) emit, and holds
//! back the next request once the window is spent.
//!
//! Limiters are per client and injectable:
//!
//! ```rust
//! use std::sync::Arc;
//! use woocommerce_api::clients::{NoopRateLimiter, RestClient};
//!
//! let client = RestClient::new("https://shop.example.com")
//!     .unwrap()
//!     .with_rate_limiter(Arc::new(NoopRateLimiter));
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clients::http_response::header_value;

/// `X-RateLimit-Reset` values above this are Unix timestamps, not delays.
pub const EPOCH_RESET_THRESHOLD: i64 = 1_000_000_000;

/// Rate-limit state reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window (`X-RateLimit-Limit`).
    pub limit: Option<u64>,
    /// Requests left in the current window (`X-RateLimit-Remaining`).
    pub remaining: Option<u64>,
    /// Seconds until the window resets, counted from `last_request`
    /// (`X-RateLimit-Reset`). Values above [`EPOCH_RESET_THRESHOLD`] are read
    /// as a Unix timestamp instead.
    pub reset: Option<i64>,
    /// Seconds to wait before retrying (`Retry-After`).
    pub retry_after: Option<u64>,
    /// When the headers were observed.
    pub last_request: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Parses rate-limit headers from lowercased response headers.
    ///
    /// Returns `None` when none of the headers are present.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let number = |name: &str| header_value(headers, name).and_then(|v| v.trim().parse().ok());

        let limit = number("x-ratelimit-limit");
        let remaining = number("x-ratelimit-remaining");
        let reset = header_value(headers, "x-ratelimit-reset").and_then(|v| v.trim().parse().ok());
        let retry_after = number("retry-after").or_else(|| number("x-ratelimit-retry-after"));

        if limit.is_none() && remaining.is_none() && reset.is_none() && retry_after.is_none() {
            return None;
        }

        Some(Self {
            limit,
            remaining,
            reset,
            retry_after,
            last_request: None,
        })
    }

    /// Returns `true` when the server reported no requests left.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Returns how long to wait at `now` before the next request is allowed.
    #[must_use]
    pub fn delay_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        if !self.is_exhausted() {
            return None;
        }

        let elapsed = self
            .last_request
            .map_or(0, |at| (now - at).num_seconds().max(0));

        let wait = match (self.retry_after.filter(|secs| *secs > 0), self.reset) {
            (Some(retry_after), _) => i64::try_from(retry_after).unwrap_or(i64::MAX) - elapsed,
            (None, Some(reset)) if reset > EPOCH_RESET_THRESHOLD => reset - now.timestamp(),
            (None, Some(reset)) => reset - elapsed,
            (None, None) => return None,
        };
        (wait > 0).then(|| Duration::from_secs(wait.unsigned_abs()))
    }
}

/// A capability the executor consults around every send.
pub trait RateLimiter: Send + Sync + Debug {
    /// Returns how long to wait before the next request, if at all.
    fn delay_before_send(&self) -> Option<Duration>;

    /// Records the headers of a response.
    fn update(&self, headers: &HashMap<String, Vec<String>>);
}

/// Tracks rate-limit headers per client, guarded by a mutex.
#[derive(Debug, Default)]
pub struct HeaderRateLimiter {
    state: Mutex<RateLimit>,
}

impl HeaderRateLimiter {
    /// Creates a limiter with no recorded state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> RateLimit {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, RateLimit> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RateLimiter for HeaderRateLimiter {
    fn delay_before_send(&self) -> Option<Duration> {
        self.lock().delay_at(Utc::now())
    }

    fn update(&self, headers: &HashMap<String, Vec<String>>) {
        let Some(mut observed) = RateLimit::from_headers(headers) else {
            return;
        };
        observed.last_request = Some(Utc::now());
        *self.lock() = observed;
    }
}

/// A limiter that never delays and ignores headers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRateLimiter;

impl RateLimiter for NoopRateLimiter {
    fn delay_before_send(&self) -> Option<Duration> {
        None
    }

    fn update(&self, _headers: &HashMap<String, Vec<String>>) {}
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HeaderRateLimiter>();
};
