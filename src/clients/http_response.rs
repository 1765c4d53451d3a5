//! HTTP response types.
//!
//! [`HttpResponse`] holds what came back from the transport: the status code,
//! lowercased headers and the raw body bytes. WooCommerce-specific headers are
//! parsed on construction into [`PaginationInfo`] and [`RateLimit`].

use std::collections::HashMap;

use crate::clients::rate_limit::RateLimit;

/// Page totals reported by WordPress in the `X-WP-Total` and
/// `X-WP-TotalPages` headers of collection responses.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use woocommerce_api::clients::PaginationInfo;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-wp-total".to_string(), vec!["42".to_string()]);
/// headers.insert("x-wp-totalpages".to_string(), vec!["5".to_string()]);
///
/// let info = PaginationInfo::from_headers(&headers).unwrap();
/// assert_eq!(info.total, Some(42));
/// assert_eq!(info.total_pages, Some(5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Total number of items across all pages.
    pub total: Option<u64>,
    /// Total number of pages at the requested page size.
    pub total_pages: Option<u64>,
}

impl PaginationInfo {
    /// Parses page totals from lowercased headers.
    ///
    /// Returns `None` when neither header is present.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let total = header_value(headers, "x-wp-total").and_then(|v| v.trim().parse().ok());
        let total_pages =
            header_value(headers, "x-wp-totalpages").and_then(|v| v.trim().parse().ok());

        if total.is_none() && total_pages.is_none() {
            None
        } else {
            Some(Self { total, total_pages })
        }
    }
}

/// An HTTP response as seen by the executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lowercased names (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Page totals, when the response carried them.
    pub pagination: Option<PaginationInfo>,
    /// Rate-limit snapshot, when the response carried rate-limit headers.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing pagination and rate-limit headers.
    ///
    /// Header names are expected in lowercase; see [`parse_header_map`].
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let pagination = PaginationInfo::from_headers(&headers);
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            pagination,
            rate_limit,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the status code is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500
    }

    /// Returns `true` if the body is empty or only whitespace.
    #[must_use]
    pub fn is_body_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Returns the first value of a header, matching case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, &name.to_ascii_lowercase())
    }

    /// Returns the body as UTF-8 text, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Converts a reqwest header map into lowercased names with all values kept.
#[must_use]
pub fn parse_header_map(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

pub(crate) fn header_value<'a>(
    headers: &'a HashMap<String, Vec<String>>,
    name: &str,
) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_for_2xx_range() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), Vec::new()).is_ok());
        }
        for code in [199, 300, 404, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), Vec::new()).is_ok());
        }
    }

    #[test]
    fn test_parses_pagination_headers() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-wp-total", "120"), ("x-wp-totalpages", "12")]),
            b"[]".to_vec(),
        );

        assert_eq!(
            response.pagination,
            Some(PaginationInfo {
                total: Some(120),
                total_pages: Some(12),
            })
        );
    }

    #[test]
    fn test_pagination_absent_without_headers() {
        let response = HttpResponse::new(200, HashMap::new(), b"{}".to_vec());
        assert!(response.pagination.is_none());
        assert!(response.rate_limit.is_none());
    }

    #[test]
    fn test_pagination_ignores_malformed_values() {
        let info = PaginationInfo::from_headers(&headers(&[
            ("x-wp-total", "lots"),
            ("x-wp-totalpages", "3"),
        ]))
        .unwrap();

        assert_eq!(info.total, None);
        assert_eq!(info.total_pages, Some(3));
    }

    #[test]
    fn test_blank_body_detection() {
        assert!(HttpResponse::new(200, HashMap::new(), Vec::new()).is_body_blank());
        assert!(HttpResponse::new(200, HashMap::new(), b" \n".to_vec()).is_body_blank());
        assert!(!HttpResponse::new(200, HashMap::new(), b"{}".to_vec()).is_body_blank());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("x-wp-total", "1")]), Vec::new());
        assert_eq!(response.header("X-WP-Total"), Some("1"));
    }
}
