//! Response wrapper for resource operations.
//!
//! [`ResourceResponse<T>`] pairs the decoded data with metadata from the HTTP
//! response: status, headers, page totals and rate-limit state. It implements
//! `Deref<Target = T>`, so the wrapper can be used like the data itself:
//!
//! ```rust,ignore
//! let orders = client.orders().list(&OrderListParams::default()).await?;
//!
//! // Vec methods via Deref
//! for order in orders.iter() {
//!     println!("{:?}", order.number);
//! }
//!
//! // Page totals from X-WP-Total / X-WP-TotalPages
//! println!("{} orders over {} pages", orders.total().unwrap_or(0), orders.total_pages().unwrap_or(0));
//!
//! // Take ownership of the data
//! let orders: Vec<Order> = orders.into_inner();
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::clients::{HttpResponse, PaginationInfo, RateLimit};

/// Decoded data plus response metadata.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use woocommerce_api::clients::PaginationInfo;
/// use woocommerce_api::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["a", "b", "c"],
///     200,
///     HashMap::new(),
///     Some(PaginationInfo { total: Some(30), total_pages: Some(10) }),
///     None,
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.total(), Some(30));
/// assert!(response.has_next_page(1));
/// assert!(!response.has_next_page(10));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    status: u16,
    headers: HashMap<String, Vec<String>>,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<RateLimit>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` from its parts.
    #[must_use]
    pub const fn new(
        data: T,
        status: u16,
        headers: HashMap<String, Vec<String>>,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<RateLimit>,
    ) -> Self {
        Self {
            data,
            status,
            headers,
            pagination,
            rate_limit,
        }
    }

    /// Wraps `data` with the metadata of `response`.
    #[must_use]
    pub fn from_http_response(data: T, response: HttpResponse) -> Self {
        Self {
            data,
            status: response.code,
            headers: response.headers,
            pagination: response.pagination,
            rate_limit: response.rate_limit,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the lowercased response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// Returns the page totals, if the response carried them.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Returns the total item count from `X-WP-Total`.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.pagination.and_then(|p| p.total)
    }

    /// Returns the total page count from `X-WP-TotalPages`.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.pagination.and_then(|p| p.total_pages)
    }

    /// Returns `true` if pages remain after `current_page` (1-based).
    #[must_use]
    pub fn has_next_page(&self, current_page: u64) -> bool {
        self.total_pages().is_some_and(|pages| current_page < pages)
    }

    /// Returns the rate-limit snapshot, if the response carried one.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Maps the inner data while keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            status: self.status,
            headers: self.headers,
            pagination: self.pagination,
            rate_limit: self.rate_limit,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
