//! Webhook delivery verification.
//!
//! Webhook subscriptions themselves are managed through
//! [`RestClient::webhooks`](crate::RestClient::webhooks). This module handles
//! the other side: checking that an incoming delivery was signed with the
//! subscription's secret before trusting its body.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::webhooks::{verify_webhook, WebhookError, WebhookRequest};
//!
//! fn handle(body: Vec<u8>, headers: &[(&str, &str)]) -> Result<(), WebhookError> {
//!     let request = WebhookRequest::from_headers(body, headers.iter().copied());
//!     let context = verify_webhook("s3cr3t", &request)?;
//!     println!("{:?} delivery {:?}", context.topic(), context.delivery_id());
//!     Ok(())
//! }
//!
//! assert!(handle(b"{}".to_vec(), &[]).is_err());
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are `Send + Sync`.

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, verify_webhook, verify_webhook_signature, WebhookContext, WebhookRequest,
    HEADER_DELIVERY_ID, HEADER_EVENT, HEADER_RESOURCE, HEADER_SIGNATURE, HEADER_SOURCE,
    HEADER_TOPIC, HEADER_WEBHOOK_ID,
};
