//! Billing command handlers.

pub mod cancel_subscription;
pub mod create_payment_session;
pub mod handle_webhook_event;

#[cfg(test)]
pub(crate) mod support;

pub use cancel_subscription::{CancelSubscriptionCommand, CancelSubscriptionHandler};
pub use create_payment_session::{CreatePaymentSessionCommand, CreatePaymentSessionHandler};
pub use handle_webhook_event::{HandleWebhookEventHandler, HandleWebhookEventResult};
