//! Configuration types for the WooCommerce client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: everything a [`RestClient`](crate::clients::RestClient) needs
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`ShopUrl`]: a validated site base URL
//! - [`ConsumerKey`] and [`ConsumerSecret`]: validated REST API credentials
//! - [`ApiVersion`]: the REST namespace version to target
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use woocommerce_api::{ApiVersion, ClientConfig, ShopUrl};
//!
//! let config = ClientConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://shop.example.com/wp-json/wc/v3");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ConsumerKey, ConsumerSecret, ShopUrl};
pub use version::ApiVersion;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Default pause between a failed attempt and its retry.
pub const DEFAULT_RETRY_HOLD: Duration = Duration::from_millis(1000);

/// Path segment WordPress mounts the REST API under.
pub const REST_PREFIX: &str = "wp-json/wc";

/// Configuration for a WooCommerce REST client.
///
/// Built once through [`ClientConfig::builder`]. Credentials are optional here
/// because they may also be supplied after construction with
/// [`RestClient::authenticate`](crate::clients::RestClient::authenticate).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    shop_url: ShopUrl,
    api_version: ApiVersion,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    retry_hold: Duration,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Creates a configuration for `shop_url` with every other setting at its default.
    #[must_use]
    pub const fn new(shop_url: ShopUrl) -> Self {
        Self {
            shop_url,
            api_version: ApiVersion::latest(),
            credentials: None,
            user_agent_prefix: None,
            retry_hold: DEFAULT_RETRY_HOLD,
            timeout: None,
        }
    }

    /// Returns the shop URL.
    #[must_use]
    pub const fn shop_url(&self) -> &ShopUrl {
        &self.shop_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the pause between retry attempts.
    #[must_use]
    pub const fn retry_hold(&self) -> Duration {
        self.retry_hold
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the versioned REST base URL, `{shop}/wp-json/wc/{version}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{REST_PREFIX}/{}", self.shop_url, self.api_version)
    }

    pub(crate) fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Only `shop_url` is required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `credentials`: `None`
/// - `user_agent_prefix`: `None`
/// - `retry_hold`: one second
/// - `timeout`: `None` (no client-side timeout)
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    shop_url: Option<ShopUrl>,
    api_version: Option<ApiVersion>,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    retry_hold: Option<Duration>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop URL (required).
    #[must_use]
    pub fn shop_url(mut self, shop_url: ShopUrl) -> Self {
        self.shop_url = Some(shop_url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the consumer key and secret used for Basic authentication.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the pause between a retryable failure and the next attempt.
    #[must_use]
    pub const fn retry_hold(mut self, hold: Duration) -> Self {
        self.retry_hold = Some(hold);
        self
    }

    /// Sets the timeout applied by the underlying HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_url` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let shop_url = self
            .shop_url
            .ok_or(ConfigError::MissingRequiredField { field: "shop_url" })?;

        Ok(ClientConfig {
            shop_url,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            credentials: self.credentials,
            user_agent_prefix: self.user_agent_prefix,
            retry_hold: self.retry_hold.unwrap_or(DEFAULT_RETRY_HOLD),
            timeout: self.timeout,
        })
    }
}
