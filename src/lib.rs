//! # WooCommerce API Rust Client
//!
//! A Rust client for the WooCommerce REST API, providing type-safe
//! configuration, consumer-key authentication, typed resource operations and
//! webhook verification.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the shop URL and API credentials
//! - Typed records and filters for products, variations, categories, tags,
//!   coupons, customers, orders, order notes, refunds and webhooks
//! - A uniform create/get/list/update/delete/batch operation set per resource
//! - An async executor with one bounded retry and rate-limit tracking
//! - Webhook delivery signature verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{ApiVersion, ClientConfig, Credentials, RestClient, ShopUrl};
//!
//! // Configure the client with the builder
//! let config = ClientConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let mut client = RestClient::from_config(config).unwrap();
//! client.authenticate(Credentials::from_parts("ck_example", "cs_example").unwrap());
//!
//! assert_eq!(client.base_url(), "https://shop.example.com/wp-json/wc/v3");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use woocommerce_api::rest::BatchRequest;
//! use woocommerce_api::rest::resources::{
//!     ForceDeleteParams, Order, OrderListParams, OrderNote, OrderStatus,
//! };
//!
//! // List processing orders, 50 per page
//! let orders = client
//!     .orders()
//!     .list(&OrderListParams {
//!         status: Some(vec![OrderStatus::Processing]),
//!         per_page: Some(50),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} matching orders", orders.total().unwrap_or(0));
//!
//! // Mark the first one completed; only `status` is sent
//! let id = orders[0].id.unwrap();
//! client
//!     .orders()
//!     .update(id, &Order { status: Some(OrderStatus::Completed), ..Default::default() })
//!     .await?;
//!
//! // Add a customer-facing note
//! client
//!     .order_notes(id)
//!     .create(&OrderNote {
//!         note: Some("Shipped today".into()),
//!         customer_note: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<ResourceResponse<_>, HttpError>`:
//!
//! ```rust,ignore
//! use woocommerce_api::HttpError;
//!
//! match client.products().get(999).await {
//!     Ok(product) => println!("{:?}", product.name),
//!     Err(error) if error.api_error().is_some_and(|e| e.is_not_found()) => {
//!         println!("no such product");
//!     }
//!     Err(HttpError::AttemptsExhausted { .. }) => println!("store unreachable"),
//!     Err(error) => return Err(error.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every client owns its configuration and rate-limit state
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Sparse writes**: unset fields are never sent

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    ApiVersion, ClientConfig, ClientConfigBuilder, ConsumerKey, ConsumerSecret, ShopUrl,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, PaginationInfo,
    RateLimit, RestClient,
};

// Re-export REST types
pub use rest::{BatchRequest, BatchResponse, Resource, ResourceResponse, Service};
