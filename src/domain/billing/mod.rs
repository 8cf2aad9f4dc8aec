//! Billing domain: transaction references, webhook events, and the webhook
//! signature guard.

mod errors;
mod events;
mod reference;
mod signature;

pub use errors::BillingError;
pub use events::{
    ChargeSuccessData, PaystackEvent, SubscriptionCreateData, WebhookCustomer, WebhookEnvelope,
};
pub use reference::{ReferenceError, TransactionReference, REFERENCE_SEPARATOR};
pub use signature::{SignatureMismatch, WebhookVerifier, SIGNATURE_HEADER};

#[cfg(test)]
pub(crate) use signature::sign_payload;
