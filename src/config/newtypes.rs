//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so a client can
//! never be built around an empty URL or credential.

use crate::error::ConfigError;
use std::fmt;

/// The base URL of the WordPress site hosting WooCommerce.
///
/// The URL must carry an `http` or `https` scheme and a host. Surrounding
/// whitespace and trailing slashes are removed so the REST prefix can be
/// appended directly.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ShopUrl;
///
/// let url = ShopUrl::new("https://shop.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://shop.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "shop.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ShopUrl {
    /// Creates a new validated shop URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopUrl`] if the URL is empty and
    /// [`ConfigError::InvalidShopUrl`] if it has no http(s) scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        if url.is_empty() {
            return Err(ConfigError::EmptyShopUrl);
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidShopUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidShopUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidShopUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ShopUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated WooCommerce consumer key (`ck_...`).
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerKey;
///
/// let key = ConsumerKey::new("ck_123").unwrap();
/// assert_eq!(key.as_ref(), "ck_123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated WooCommerce consumer secret (`cs_...`).
///
/// The `Debug` implementation masks the value so secrets never end up in
/// logs, displaying `ConsumerSecret(*****)` instead.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("cs_456").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_url_rejects_empty_string() {
        assert!(matches!(ShopUrl::new(""), Err(ConfigError::EmptyShopUrl)));
        assert!(matches!(ShopUrl::new("   "), Err(ConfigError::EmptyShopUrl)));
        assert!(matches!(ShopUrl::new("/"), Err(ConfigError::EmptyShopUrl)));
    }

    #[test]
    fn test_shop_url_strips_trailing_slashes() {
        let url = ShopUrl::new("https://shop.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_shop_url_keeps_subdirectory_installs() {
        let url = ShopUrl::new("https://example.com/store/").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/store");
        assert_eq!(url.host_name(), "example.com");
    }

    #[test]
    fn test_shop_url_accepts_port() {
        let url = ShopUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_shop_url_rejects_invalid() {
        assert!(matches!(
            ShopUrl::new("shop.example.com"),
            Err(ConfigError::InvalidShopUrl { .. })
        ));
        assert!(matches!(
            ShopUrl::new("ftp://shop.example.com"),
            Err(ConfigError::InvalidShopUrl { .. })
        ));
        assert!(matches!(
            ShopUrl::new("https://"),
            Err(ConfigError::InvalidShopUrl { .. })
        ));
    }

    #[test]
    fn test_consumer_key_rejects_empty_string() {
        assert!(matches!(
            ConsumerKey::new(""),
            Err(ConfigError::EmptyConsumerKey)
        ));
    }

    #[test]
    fn test_consumer_secret_masks_value_in_debug() {
        let secret = ConsumerSecret::new("cs_super_secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ConsumerSecret(*****)");
        assert!(!debug_output.contains("cs_super_secret"));
    }

    #[test]
    fn test_consumer_secret_rejects_empty_string() {
        assert!(matches!(
            ConsumerSecret::new(""),
            Err(ConfigError::EmptyConsumerSecret)
        ));
    }
}
