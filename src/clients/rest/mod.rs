//! REST API client for WooCommerce.
//!
//! [`RestClient`] is the entry point: build it from a shop URL or a
//! [`ClientConfig`](crate::config::ClientConfig), authenticate it with a
//! consumer key pair, and reach each resource through its accessor.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use woocommerce_api::{ApiVersion, ClientConfig, Credentials, RestClient, ShopUrl};
//! use woocommerce_api::rest::resources::OrderListParams;
//!
//! let config = ClientConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com")?)
//!     .api_version(ApiVersion::V3)
//!     .timeout(Duration::from_secs(30))
//!     .credentials(Credentials::from_parts("ck_...", "cs_...")?)
//!     .build()?;
//!
//! let client = RestClient::from_config(config)?;
//! let orders = client.orders().list(&OrderListParams::default()).await?;
//! ```

mod client;

pub use client::RestClient;
