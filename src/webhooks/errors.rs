//! Webhook verification error types.
//!
//! - [`WebhookError::MissingHeader`]: a required `X-WC-Webhook-*` header is absent
//! - [`WebhookError::InvalidSignature`]: the body does not match its signature
//! - [`WebhookError::InvalidKey`]: the secret could not key the HMAC
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::webhooks::WebhookError;
//!
//! let error = WebhookError::MissingHeader { header: "X-WC-Webhook-Signature" };
//! assert!(error.to_string().contains("X-WC-Webhook-Signature"));
//! ```

use thiserror::Error;

/// Error type for webhook delivery verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// A required header is absent from the delivery.
    #[error("Webhook delivery is missing the {header} header")]
    MissingHeader {
        /// The header name.
        header: &'static str,
    },

    /// The signature does not match the body.
    ///
    /// Either the secret is wrong or the body was altered in transit. Reject
    /// the delivery.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The secret was rejected as an HMAC key.
    #[error("Webhook secret is not a valid HMAC key")]
    InvalidKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WebhookError::InvalidSignature.to_string(),
            "Webhook signature verification failed"
        );
        assert_eq!(
            WebhookError::MissingHeader {
                header: "X-WC-Webhook-Topic"
            }
            .to_string(),
            "Webhook delivery is missing the X-WC-Webhook-Topic header"
        );
    }

    #[test]
    fn test_webhook_error_is_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> = Box::new(WebhookError::InvalidKey);
        assert!(error.to_string().contains("HMAC"));
    }
}
