//! Webhook delivery verification.
//!
//! WooCommerce signs each delivery with the webhook's secret: the
//! `X-WC-Webhook-Signature` header carries the base64-encoded HMAC-SHA256 of
//! the raw request body.
//!
//! - [`verify_webhook`]: checks a [`WebhookRequest`] and returns its
//!   [`WebhookContext`]
//! - [`verify_webhook_signature`]: the low-level check on body and header
//! - [`compute_signature`]: signs a body, for tests and relays
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::webhooks::{compute_signature, verify_webhook, WebhookRequest};
//!
//! let body = br#"{"id":727,"status":"processing"}"#;
//! let signature = compute_signature(body, "s3cr3t").unwrap();
//!
//! let request = WebhookRequest::from_headers(
//!     body.to_vec(),
//!     [
//!         ("X-WC-Webhook-Signature", signature.as_str()),
//!         ("X-WC-Webhook-Topic", "order.updated"),
//!         ("X-WC-Webhook-ID", "142"),
//!     ],
//! );
//!
//! let context = verify_webhook("s3cr3t", &request).unwrap();
//! assert_eq!(context.topic(), Some("order.updated"));
//! assert_eq!(context.webhook_id(), Some(142));
//! ```
//!
//! # Security
//!
//! Signatures are compared in constant time.

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

// ============================================================================
// Header Constants
// ============================================================================

/// Base64 HMAC-SHA256 of the body.
pub const HEADER_SIGNATURE: &str = "X-WC-Webhook-Signature";

/// `resource.event`, e.g. `order.created`.
pub const HEADER_TOPIC: &str = "X-WC-Webhook-Topic";

/// The resource part of the topic.
pub const HEADER_RESOURCE: &str = "X-WC-Webhook-Resource";

/// The event part of the topic.
pub const HEADER_EVENT: &str = "X-WC-Webhook-Event";

/// Id of the webhook that fired.
pub const HEADER_WEBHOOK_ID: &str = "X-WC-Webhook-ID";

/// Id of this delivery, for idempotency.
pub const HEADER_DELIVERY_ID: &str = "X-WC-Webhook-Delivery-ID";

/// URL of the site that sent the delivery.
pub const HEADER_SOURCE: &str = "X-WC-Webhook-Source";

// ============================================================================
// WebhookRequest
// ============================================================================

/// An incoming delivery: the raw body and the `X-WC-Webhook-*` headers.
///
/// The body is kept as raw bytes; the signature covers the exact payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookRequest {
    body: Vec<u8>,
    signature: Option<String>,
    topic: Option<String>,
    resource: Option<String>,
    event: Option<String>,
    webhook_id: Option<String>,
    delivery_id: Option<String>,
    source: Option<String>,
}

impl WebhookRequest {
    /// Creates a request from a body and its signature header.
    #[must_use]
    pub fn new(body: Vec<u8>, signature: impl Into<String>) -> Self {
        Self {
            body,
            signature: Some(signature.into()),
            ..Default::default()
        }
    }

    /// Creates a request from a body and header pairs.
    ///
    /// Header names match case-insensitively; unrelated headers are ignored.
    #[must_use]
    pub fn from_headers<'a, I>(body: Vec<u8>, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self {
            body,
            ..Default::default()
        };

        for (name, value) in headers {
            let slot = if name.eq_ignore_ascii_case(HEADER_SIGNATURE) {
                &mut request.signature
            } else if name.eq_ignore_ascii_case(HEADER_TOPIC) {
                &mut request.topic
            } else if name.eq_ignore_ascii_case(HEADER_RESOURCE) {
                &mut request.resource
            } else if name.eq_ignore_ascii_case(HEADER_EVENT) {
                &mut request.event
            } else if name.eq_ignore_ascii_case(HEADER_WEBHOOK_ID) {
                &mut request.webhook_id
            } else if name.eq_ignore_ascii_case(HEADER_DELIVERY_ID) {
                &mut request.delivery_id
            } else if name.eq_ignore_ascii_case(HEADER_SOURCE) {
                &mut request.source
            } else {
                continue;
            };
            *slot = Some(value.trim().to_string());
        }

        request
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the signature header value, if present.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns the topic header value, if present.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }
}

// ============================================================================
// WebhookContext
// ============================================================================

/// Metadata of a verified delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookContext {
    topic: Option<String>,
    resource: Option<String>,
    event: Option<String>,
    webhook_id: Option<u64>,
    delivery_id: Option<String>,
    source: Option<String>,
}

impl WebhookContext {
    fn from_request(request: &WebhookRequest) -> Self {
        let (topic_resource, topic_event) = request
            .topic
            .as_deref()
            .and_then(|topic| topic.split_once('.'))
            .map_or((None, None), |(resource, event)| {
                (Some(resource.to_string()), Some(event.to_string()))
            });

        Self {
            topic: request.topic.clone(),
            resource: request.resource.clone().or(topic_resource),
            event: request.event.clone().or(topic_event),
            webhook_id: request.webhook_id.as_deref().and_then(|id| id.parse().ok()),
            delivery_id: request.delivery_id.clone(),
            source: request.source.clone(),
        }
    }

    /// Returns the topic, e.g. `order.created`.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns the resource, from its header or the topic.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns the event, from its header or the topic.
    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// Returns the id of the webhook that fired.
    #[must_use]
    pub const fn webhook_id(&self) -> Option<u64> {
        self.webhook_id
    }

    /// Returns the delivery id.
    #[must_use]
    pub fn delivery_id(&self) -> Option<&str> {
        self.delivery_id.as_deref()
    }

    /// Returns the sending site's URL.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

// ============================================================================
// Verification Functions
// ============================================================================

/// Computes the base64 HMAC-SHA256 signature of `body` under `secret`.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidKey`] if the HMAC rejects the key.
pub fn compute_signature(body: &[u8], secret: &str) -> Result<String, WebhookError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| WebhookError::InvalidKey)?;
    mac.update(body);
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

/// Returns `true` if `signature` is the signature of `body` under `secret`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::webhooks::{compute_signature, verify_webhook_signature};
///
/// let signature = compute_signature(b"payload", "secret").unwrap();
/// assert!(verify_webhook_signature(b"payload", &signature, "secret"));
/// assert!(!verify_webhook_signature(b"payload!", &signature, "secret"));
/// ```
#[must_use]
pub fn verify_webhook_signature(body: &[u8], signature: &str, secret: &str) -> bool {
    compute_signature(body, secret).is_ok_and(|computed| {
        computed
            .as_bytes()
            .ct_eq(signature.trim().as_bytes())
            .into()
    })
}

/// Verifies a delivery and returns its metadata.
///
/// # Errors
///
/// - [`WebhookError::MissingHeader`] if the signature header is absent
/// - [`WebhookError::InvalidSignature`] if the signature does not match
pub fn verify_webhook(
    secret: &str,
    request: &WebhookRequest,
) -> Result<WebhookContext, WebhookError> {
    let signature = request.signature().ok_or(WebhookError::MissingHeader {
        header: HEADER_SIGNATURE,
    })?;

    if !verify_webhook_signature(request.body(), signature, secret) {
        tracing::debug!(topic = ?request.topic(), "Rejected webhook delivery with bad signature");
        return Err(WebhookError::InvalidSignature);
    }

    Ok(WebhookContext::from_request(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "s3cr3t";
    const BODY: &[u8] = br#"{"id":727,"status":"processing"}"#;

    #[test]
    fn test_signature_is_base64_sha256() {
        let signature = compute_signature(BODY, SECRET).unwrap();
        assert_eq!(signature.len(), 44);
        assert_eq!(BASE64_STANDARD.decode(&signature).unwrap().len(), 32);
    }

    #[test]
    fn test_known_signature_vector() {
        // RFC 4231 test case 2
        let signature = compute_signature(b"what do ya want for nothing?", "Jefe").unwrap();
        let expected = BASE64_STANDARD.encode([
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ]);
        assert_eq!(signature, expected);
    }

    #[test]
    fn test_tampered_body_is_rejected() {
        let signature = compute_signature(BODY, SECRET).unwrap();
        let tampered = br#"{"id":727,"status":"completed"}"#;

        assert!(verify_webhook_signature(BODY, &signature, SECRET));
        assert!(!verify_webhook_signature(tampered, &signature, SECRET));
        assert!(!verify_webhook_signature(BODY, &signature, "other"));
        assert!(!verify_webhook_signature(BODY, "", SECRET));
    }

    #[test]
    fn test_verify_webhook_reads_context() {
        let signature = compute_signature(BODY, SECRET).unwrap();
        let request = WebhookRequest::from_headers(
            BODY.to_vec(),
            [
                ("x-wc-webhook-signature", signature.as_str()),
                ("x-wc-webhook-topic", "order.updated"),
                ("x-wc-webhook-id", "142"),
                ("x-wc-webhook-delivery-id", "9f2c"),
                ("x-wc-webhook-source", "https://shop.example.com/"),
                ("content-type", "application/json"),
            ],
        );

        let context = verify_webhook(SECRET, &request).unwrap();

        assert_eq!(context.topic(), Some("order.updated"));
        assert_eq!(context.resource(), Some("order"));
        assert_eq!(context.event(), Some("updated"));
        assert_eq!(context.webhook_id(), Some(142));
        assert_eq!(context.delivery_id(), Some("9f2c"));
        assert_eq!(context.source(), Some("https://shop.example.com/"));
    }

    #[test]
    fn test_missing_signature_header() {
        let request = WebhookRequest::from_headers(BODY.to_vec(), [("X-WC-Webhook-Topic", "order.created")]);

        assert_eq!(
            verify_webhook(SECRET, &request),
            Err(WebhookError::MissingHeader {
                header: HEADER_SIGNATURE
            })
        );
    }

    #[test]
    fn test_bad_signature_is_invalid() {
        let request = WebhookRequest::new(BODY.to_vec(), "bm90IGEgc2lnbmF0dXJl");
        assert_eq!(
            verify_webhook(SECRET, &request),
            Err(WebhookError::InvalidSignature)
        );
    }
}
