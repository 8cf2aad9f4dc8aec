//! Paystack configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Paystack API and webhook configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaystackConfig {
    /// Paystack secret API key (sk_test_... or sk_live_...)
    pub secret_key: SecretString,

    /// Base URL for the Paystack REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL the hosted checkout redirects to after a successful payment
    pub callback_url: String,

    /// Webhook signing secret (HMAC-SHA512 key for inbound deliveries)
    pub webhook_secret: SecretString,
}

impl PaystackConfig {
    /// Check if using a Paystack test key
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.expose_secret().starts_with("sk_test_")
    }

    /// Check if using a Paystack live key
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.expose_secret().starts_with("sk_live_")
    }

    /// Validate Paystack configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYSTACK_SECRET_KEY"));
        }
        if self.webhook_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYSTACK_WEBHOOK_SECRET"));
        }

        // Verify key prefix for safety
        if !self.secret_key.expose_secret().starts_with("sk_") {
            return Err(ValidationError::InvalidSecretKey);
        }

        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if !self.callback_url.starts_with("http") {
            return Err(ValidationError::InvalidCallbackUrl);
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.paystack.co".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(secret_key: &str, callback_url: &str) -> PaystackConfig {
        PaystackConfig {
            secret_key: SecretString::new(secret_key.to_string()),
            base_url: default_base_url(),
            callback_url: callback_url.to_string(),
            webhook_secret: SecretString::new("sk_test_webhook".to_string()),
        }
    }

    #[test]
    fn test_is_test_mode() {
        let config = config_with("sk_test_xxx", "https://app.example.com/checkout/success");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn test_is_live_mode() {
        let config = config_with("sk_live_xxx", "https://app.example.com/checkout/success");
        assert!(config.is_live_mode());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = config_with("sk_test_abcd1234", "https://app.example.com/checkout/success");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_secret_key() {
        let config = config_with("", "https://app.example.com/checkout/success");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_key_prefix() {
        let config = config_with("pk_test_xxx", "https://app.example.com/checkout/success");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSecretKey)
        ));
    }

    #[test]
    fn test_validation_invalid_callback_url() {
        let config = config_with("sk_test_xxx", "app.example.com");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCallbackUrl)
        ));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(default_base_url(), "https://api.paystack.co");
    }
}
