//! Request construction.
//!
//! [`RequestBuilder`] turns a method, a path relative to the REST namespace,
//! optional query parameters and an optional body into a fully-formed
//! [`HttpRequest`]. Building never touches the network.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::EncodingError;
use crate::config::ClientConfig;

/// Content type sent and accepted on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods used by the REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource or collection.
    Get,
    /// Create a resource, or run a batch.
    Post,
    /// Update a resource.
    Put,
    /// Delete a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-formed outbound request.
///
/// Requests are immutable once built, so the executor can re-send the same
/// value on retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, including the encoded query string if any.
    pub url: String,
    /// Path relative to the REST namespace, without the query string.
    pub path: String,
    /// Encoded query string without the leading `?`; empty when there are no parameters.
    pub query: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// JSON-encoded body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builds requests against a versioned REST base URL.
///
/// The builder owns the default headers, so authenticating swaps a single
/// header without touching anything else.
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    base_url: String,
    default_headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Creates a builder for the given configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());

        let mut builder = Self {
            base_url: config.base_url(),
            default_headers,
        };
        if let Some(credentials) = config.credentials() {
            builder.set_credentials(credentials);
        }
        builder
    }

    /// Returns the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Installs the `Authorization` header for `credentials`.
    pub fn set_credentials(&mut self, credentials: &Credentials) {
        self.default_headers.insert(
            "Authorization".to_string(),
            credentials.authorization_header(),
        );
    }

    /// Builds a request.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Query`] or [`EncodingError::Body`] when the
    /// parameters or the body cannot be serialized.
    pub fn build<Q, B>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<HttpRequest, EncodingError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let query = match query {
            Some(params) => encode_query(params)?,
            None => String::new(),
        };

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(EncodingError::Body)?;

        let path = path.trim_start_matches('/').to_string();
        let mut url = format!("{}/{path}", self.base_url);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        Ok(HttpRequest {
            method,
            url,
            path,
            query,
            headers: self.default_headers.clone(),
            body,
        })
    }
}

/// Serializes parameters into a URL query string.
///
/// Parameters pass through `serde_json::Value`:
/// - `null` values are skipped, so `None` fields never appear
/// - strings, numbers and booleans are stringified
/// - arrays are joined with commas, skipping nested nulls
/// - objects are emitted as their JSON text
///
/// Keys are sorted and both keys and values are percent-encoded.
///
/// # Errors
///
/// Returns [`EncodingError::Query`] if `params` cannot be serialized.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use woocommerce_api::clients::encode_query;
///
/// #[derive(Serialize, Default)]
/// struct Filter {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     search: Option<String>,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     include: Option<Vec<u64>>,
/// }
///
/// assert_eq!(encode_query(&Filter::default()).unwrap(), "");
///
/// let filter = Filter {
///     search: Some("blue shirt".to_string()),
///     include: Some(vec![3, 5]),
/// };
/// assert_eq!(encode_query(&filter).unwrap(), "include=3%2C5&search=blue%20shirt");
/// ```
pub fn encode_query<Q: Serialize + ?Sized>(params: &Q) -> Result<String, EncodingError> {
    let value = serde_json::to_value(params).map_err(EncodingError::Query)?;

    let mut pairs: Vec<(String, String)> = match value {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, val)| query_value(&val).map(|v| (key, v)))
            .collect(),
        Value::Null => Vec::new(),
        other => {
            return Err(EncodingError::Query(serde::ser::Error::custom(format!(
                "query parameters must serialize to an object, got {other}"
            ))))
        }
    };
    pairs.sort();

    Ok(pairs
        .iter()
        .map(|(key, val)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(val)))
        .collect::<Vec<_>>()
        .join("&"))
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let values: Vec<String> = items.iter().filter_map(query_value).collect();
            if values.is_empty() {
                None
            } else {
                Some(values.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsumerKey, ConsumerSecret, ShopUrl};
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[derive(Serialize, Default)]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        force: Option<bool>,
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_encode_query_skips_unset_fields() {
        assert_eq!(encode_query(&Filter::default()).unwrap(), "");
    }

    #[test]
    fn test_encode_query_joins_arrays_and_sorts_keys() {
        let filter = Filter {
            page: Some(2),
            status: Some(vec!["processing".to_string(), "on-hold".to_string()]),
            force: Some(true),
        };

        assert_eq!(
            encode_query(&filter).unwrap(),
            "force=true&page=2&status=processing%2Con-hold"
        );
    }

    #[test]
    fn test_encode_query_keeps_explicit_zero_values() {
        let filter = Filter {
            page: Some(0),
            force: Some(false),
            ..Default::default()
        };

        assert_eq!(encode_query(&filter).unwrap(), "force=false&page=0");
    }

    #[test]
    fn test_encode_query_rejects_non_object() {
        assert!(matches!(
            encode_query(&json!([1, 2])),
            Err(EncodingError::Query(_))
        ));
    }

    #[test]
    fn test_build_resolves_against_versioned_base() {
        let builder = RequestBuilder::new(&config());
        let request = builder
            .build::<(), ()>(HttpMethod::Get, "/orders/12", None, None)
            .unwrap();

        assert_eq!(request.url, "https://shop.example.com/wp-json/wc/v3/orders/12");
        assert_eq!(request.path, "orders/12");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_appends_query_only_when_non_empty() {
        let builder = RequestBuilder::new(&config());

        let empty = builder
            .build::<_, ()>(HttpMethod::Get, "orders", Some(&Filter::default()), None)
            .unwrap();
        assert_eq!(empty.url, "https://shop.example.com/wp-json/wc/v3/orders");

        let paged = Filter {
            page: Some(3),
            ..Default::default()
        };
        let request = builder
            .build::<_, ()>(HttpMethod::Get, "orders", Some(&paged), None)
            .unwrap();
        assert_eq!(request.url, "https://shop.example.com/wp-json/wc/v3/orders?page=3");
        assert_eq!(request.query, "page=3");
    }

    #[test]
    fn test_build_encodes_json_body() {
        let builder = RequestBuilder::new(&config());
        let request = builder
            .build::<(), _>(HttpMethod::Post, "coupons", None, Some(&json!({"code": "10off"})))
            .unwrap();

        assert_eq!(request.body.as_deref(), Some(br#"{"code":"10off"}"#.as_slice()));
    }

    #[test]
    fn test_default_headers() {
        let builder = RequestBuilder::new(&config());
        let request = builder
            .build::<(), ()>(HttpMethod::Get, "products", None, None)
            .unwrap();

        assert_eq!(request.header("accept"), Some(JSON_CONTENT_TYPE));
        assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert!(request
            .header("user-agent")
            .unwrap()
            .contains("WooCommerce API Library v"));
        assert!(request.header("authorization").is_none());
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder()
            .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let builder = RequestBuilder::new(&config);

        let user_agent = builder.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_set_credentials_installs_basic_header() {
        let mut builder = RequestBuilder::new(&config());
        let credentials = Credentials::new(
            ConsumerKey::new("ck_1").unwrap(),
            ConsumerSecret::new("cs_2").unwrap(),
        );
        builder.set_credentials(&credentials);

        let request = builder
            .build::<(), ()>(HttpMethod::Get, "products", None, None)
            .unwrap();
        assert_eq!(
            request.header("Authorization"),
            Some(credentials.authorization_header().as_str())
        );
    }
}
