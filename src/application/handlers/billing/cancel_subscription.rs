//! CancelSubscriptionHandler - Command handler for disabling a customer's subscription.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::ports::PaymentGateway;

/// Command to cancel a customer's subscription by email.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub email: String,
}

/// Handler for cancelling a subscription.
///
/// The processor is the source of truth: the customer's subscriptions are
/// looked up by email at call time, and exactly one must exist. More than one
/// means processor state has drifted from the one-subscription-per-customer
/// invariant, and the handler fails loudly instead of picking one.
pub struct CancelSubscriptionHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CancelSubscriptionHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: CancelSubscriptionCommand) -> Result<(), BillingError> {
        if cmd.email.is_empty() {
            return Err(BillingError::validation(
                "email",
                "customer email is required",
            ));
        }

        let subscriptions = self
            .gateway
            .list_subscriptions(&cmd.email)
            .await
            .map_err(BillingError::from)?
            .unwrap_or_default();

        match subscriptions.as_slice() {
            [] => Err(BillingError::NoActiveSubscription),
            [only] => {
                self.gateway
                    .cancel_subscription(&only.subscription_code, &only.email_token)
                    .await
                    .map_err(BillingError::from)?;
                tracing::info!(
                    subscription_code = %only.subscription_code,
                    "subscription cancelled"
                );
                Ok(())
            }
            many => {
                tracing::error!(
                    count = many.len(),
                    "customer holds multiple subscriptions, refusing to cancel"
                );
                Err(BillingError::AmbiguousSubscriptions { count: many.len() })
            }
        }
    }
}
