//! REST resource infrastructure for the WooCommerce API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: names an entity's collection path and parameter types
//! - **[`Service`]**: the uniform create/get/list/update/delete/batch operations
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper carrying response metadata
//! - **[`BatchRequest`] / [`BatchResponse`]**: batch envelopes
//! - **Path building**: [`build_path`] and [`operation_path`]
//!
//! Individual entities (Product, Order, etc.) live in the [`resources`]
//! submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::RestClient;
//! use woocommerce_api::rest::BatchRequest;
//! use woocommerce_api::rest::resources::{Product, ProductListParams};
//!
//! let products = client.products();
//!
//! // Fetch one product; Deref gives direct field access
//! let product = products.get(794).await?;
//! println!("{:?}", product.name);
//!
//! // List with filters
//! let params = ProductListParams { per_page: Some(50), sku: Some("WOO-1".into()), ..Default::default() };
//! let page = products.list(&params).await?;
//! println!("{} products total", page.total().unwrap_or(0));
//!
//! // Batch
//! let request = BatchRequest::new().delete(vec![799, 800]);
//! let result = products.batch(&request).await?;
//! ```

mod batch;
mod path;
mod resource;
mod response;
mod service;

pub mod resources;

pub use batch::{BatchRequest, BatchResponse};
pub use path::{build_path, operation_path, ResourceOperation};
pub use resource::Resource;
pub use response::ResourceResponse;
pub use service::Service;
