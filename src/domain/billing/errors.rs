//! Billing error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | AlreadySubscribed | 400 |
//! | NoActiveSubscription | 400 |
//! | Upstream | 400 |
//! | AmbiguousSubscriptions | 500 |
//! | Internal | 500 |

use thiserror::Error;

/// Errors surfaced by billing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// A required field is missing or malformed.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// The customer already has an active subscription.
    #[error("customer already has an active subscription")]
    AlreadySubscribed,

    /// The customer has no active subscription to act on.
    #[error("customer has no active subscription")]
    NoActiveSubscription,

    /// The processor reported more than one active subscription, which
    /// violates the one-subscription-per-customer invariant.
    #[error("expected at most one active subscription, processor returned {count}")]
    AmbiguousSubscriptions { count: usize },

    /// The payment processor rejected an outbound call.
    #[error("payment processor rejected the request: {0}")]
    Upstream(String),

    /// A failure not attributable to the processor.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BillingError {
    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BillingError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an upstream error carrying the processor's message.
    pub fn upstream(message: impl Into<String>) -> Self {
        BillingError::Upstream(message.into())
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        BillingError::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let err = BillingError::validation("plan_id", "Paystack plan ID is required");
        assert_eq!(err.to_string(), "Paystack plan ID is required");
    }

    #[test]
    fn upstream_error_carries_processor_message() {
        let err = BillingError::upstream("Invalid plan code");
        assert!(err.to_string().contains("Invalid plan code"));
    }

    #[test]
    fn ambiguous_subscriptions_reports_count() {
        let err = BillingError::AmbiguousSubscriptions { count: 3 };
        assert!(err.to_string().contains('3'));
    }
}
