//! REST API key authentication.
//!
//! WooCommerce authenticates REST requests over HTTPS with HTTP Basic auth,
//! using a consumer key as the user name and a consumer secret as the
//! password. [`Credentials`] pairs the two and renders the header value.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConsumerSecret, Credentials};
//!
//! let credentials = Credentials::new(
//!     ConsumerKey::new("ck_key").unwrap(),
//!     ConsumerSecret::new("cs_secret").unwrap(),
//! );
//!
//! assert_eq!(credentials.authorization_header(), "Basic Y2tfa2V5OmNzX3NlY3JldA==");
//! ```

use base64::prelude::*;

use crate::config::{ConsumerKey, ConsumerSecret};
use crate::error::ConfigError;

/// A consumer key and secret pair.
///
/// `Debug` output never contains the secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
}

impl Credentials {
    /// Creates credentials from validated parts.
    #[must_use]
    pub const fn new(consumer_key: ConsumerKey, consumer_secret: ConsumerSecret) -> Self {
        Self {
            consumer_key,
            consumer_secret,
        }
    }

    /// Creates credentials from raw strings, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] or
    /// [`ConfigError::EmptyConsumerSecret`] when either part is empty.
    pub fn from_parts(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ConsumerKey::new(consumer_key)?,
            ConsumerSecret::new(consumer_secret)?,
        ))
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the `Authorization` header value, `Basic base64(key:secret)`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.consumer_key.as_ref(),
            self.consumer_secret.as_ref()
        );
        format!("Basic {}", BASE64_STANDARD.encode(raw))
    }
}
