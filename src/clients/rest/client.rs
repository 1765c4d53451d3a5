//! REST client implementation for the WooCommerce API.
//!
//! This module provides the [`RestClient`] type: one configured connection to
//! a WooCommerce site that hands out resource [`Service`]s.

use std::io::Write;
use std::sync::Arc;

use serde::de::IgnoredAny;
use serde::Serialize;

use crate::auth::Credentials;
use crate::clients::{
    Destination, HttpClient, HttpError, HttpMethod, HttpResponse, RateLimiter, ReqwestTransport,
    Transport,
};
use crate::config::{ApiVersion, ClientConfig, ShopUrl};
use crate::error::ConfigError;
use crate::rest::resources::{
    Category, Coupon, Customer, Order, OrderNote, Product, ProductVariation, Refund, Tag, Webhook,
};
use crate::rest::Service;

/// REST API client for a WooCommerce site.
///
/// Resource accessors (`products()`, `orders()`, ...) return a [`Service`]
/// borrowing the client, so services are created on access and never outlive
/// it.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
/// Credentials can only change through `&mut self`.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{Credentials, RestClient};
/// use woocommerce_api::rest::resources::ProductListParams;
///
/// let mut client = RestClient::new("https://shop.example.com")?;
/// client.authenticate(Credentials::from_parts("ck_...", "cs_...")?);
///
/// let products = client.products().list(&ProductListParams::default()).await?;
/// for product in products.iter() {
///     println!("{:?}", product.name);
/// }
/// ```
#[derive(Debug)]
pub struct RestClient<T = ReqwestTransport> {
    http_client: HttpClient<T>,
    config: ClientConfig,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<ReqwestTransport> {
    /// Creates an unauthenticated client for `shop_url` with default settings.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyShopUrl`] if `shop_url` is empty
    /// - [`ConfigError::InvalidShopUrl`] if it has no `http(s)` scheme or host
    /// - [`ConfigError::HttpClientBuild`] if the HTTP stack cannot start
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::{ConfigError, RestClient};
    ///
    /// let client = RestClient::new("https://shop.example.com").unwrap();
    /// assert_eq!(client.base_url(), "https://shop.example.com/wp-json/wc/v3");
    ///
    /// assert!(matches!(RestClient::new(""), Err(ConfigError::EmptyShopUrl)));
    /// assert!(matches!(
    ///     RestClient::new("shop.example.com"),
    ///     Err(ConfigError::InvalidShopUrl { .. })
    /// ));
    /// ```
    pub fn new(shop_url: &str) -> Result<Self, ConfigError> {
        Self::from_config(ClientConfig::new(ShopUrl::new(shop_url)?))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP stack cannot start.
    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client sending through a custom transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let http_client = HttpClient::new(&config, transport);

        tracing::debug!(
            base_url = %config.base_url(),
            api_version = %config.api_version(),
            authenticated = config.credentials().is_some(),
            "Created WooCommerce REST client"
        );

        Self {
            http_client,
            config,
        }
    }

    /// Replaces the rate limiter.
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.http_client.set_rate_limiter(rate_limiter);
        self
    }

    /// Sets the credentials used for every subsequent request.
    ///
    /// Calling it again replaces the previous credentials.
    pub fn authenticate(&mut self, credentials: Credentials) {
        self.http_client.set_credentials(&credentials);
        self.config.set_credentials(credentials);
    }

    /// Returns `true` once credentials are set.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.config.credentials().is_some()
    }

    /// Returns the API version requests are sent to.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.config.api_version()
    }

    /// Returns the versioned base URL, e.g. `https://shop.example.com/wp-json/wc/v3`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Returns the underlying executor.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient<T> {
        &self.http_client
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Products (`products`).
    #[must_use]
    pub fn products(&self) -> Service<'_, Product, T> {
        Service::new(&self.http_client)
    }

    /// Variations of one product (`products/{product_id}/variations`).
    #[must_use]
    pub fn product_variations(&self, product_id: u64) -> Service<'_, ProductVariation, T> {
        Service::nested(&self.http_client, product_id)
    }

    /// Product categories (`products/categories`).
    #[must_use]
    pub fn categories(&self) -> Service<'_, Category, T> {
        Service::new(&self.http_client)
    }

    /// Product tags (`products/tags`).
    #[must_use]
    pub fn tags(&self) -> Service<'_, Tag, T> {
        Service::new(&self.http_client)
    }

    /// Coupons (`coupons`).
    #[must_use]
    pub fn coupons(&self) -> Service<'_, Coupon, T> {
        Service::new(&self.http_client)
    }

    /// Customers (`customers`).
    #[must_use]
    pub fn customers(&self) -> Service<'_, Customer, T> {
        Service::new(&self.http_client)
    }

    /// Orders (`orders`).
    #[must_use]
    pub fn orders(&self) -> Service<'_, Order, T> {
        Service::new(&self.http_client)
    }

    /// Notes of one order (`orders/{order_id}/notes`).
    #[must_use]
    pub fn order_notes(&self, order_id: u64) -> Service<'_, OrderNote, T> {
        Service::nested(&self.http_client, order_id)
    }

    /// Refunds of one order (`orders/{order_id}/refunds`).
    #[must_use]
    pub fn refunds(&self, order_id: u64) -> Service<'_, Refund, T> {
        Service::nested(&self.http_client, order_id)
    }

    /// Webhooks (`webhooks`).
    #[must_use]
    pub fn webhooks(&self) -> Service<'_, Webhook, T> {
        Service::new(&self.http_client)
    }

    /// Sends a GET for `path` and copies the 2xx body, unparsed, into `sink`.
    ///
    /// Useful for endpoints without a typed record, such as `reports` or
    /// `system_status`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the sink cannot be
    /// written.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut body = Vec::new();
    /// client.get_raw::<()>("system_status", None, &mut body).await?;
    /// ```
    pub async fn get_raw<Q>(
        &self,
        path: &str,
        query: Option<&Q>,
        sink: &mut (dyn Write + Send),
    ) -> Result<HttpResponse, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self
            .http_client
            .build_request::<Q, ()>(HttpMethod::Get, path, query, None)?;
        self.http_client
            .execute::<IgnoredAny>(&request, Destination::Raw(sink))
            .await
    }
}
