//! HandleWebhookEventHandler - Command handler for verified webhook deliveries.

use std::sync::Arc;

use crate::domain::billing::{
    BillingError, ChargeSuccessData, PaystackEvent, SubscriptionCreateData, TransactionReference,
    WebhookEnvelope,
};
use crate::ports::PaymentGateway;

/// Outcome of processing one webhook delivery.
///
/// Every variant is acknowledged with a success status to the processor;
/// the distinction exists for logging and tests. Paystack retries
/// unacknowledged deliveries, so a payload this service cannot act on is
/// still acknowledged rather than bounced forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleWebhookEventResult {
    /// A `charge.success` settled and the customer was attached to the plan.
    SubscriptionCreated {
        customer_code: String,
        plan_id: String,
    },
    /// A `charge.success` arrived for a customer who already holds a
    /// subscription; nothing to do.
    AlreadySubscribed,
    /// The event was recognized and logged, no action required.
    Acknowledged,
    /// The event was unhandled or its payload could not be used.
    Ignored,
}

/// Handler for webhook deliveries that passed signature verification.
///
/// Only `charge.success` triggers a side effect. Its reference is decoded
/// back into `(plan_id, transaction_id)` and the customer is subscribed to
/// the plan unless they already hold one. Re-deliveries therefore land on
/// the already-subscribed path, which makes the handler idempotent without
/// a dedup store.
pub struct HandleWebhookEventHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl HandleWebhookEventHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        envelope: WebhookEnvelope,
    ) -> Result<HandleWebhookEventResult, BillingError> {
        match envelope.event() {
            PaystackEvent::ChargeSuccess => self.settle_charge(&envelope).await,
            PaystackEvent::SubscriptionCreate => {
                match SubscriptionCreateData::from_value(&envelope.data) {
                    Ok(data) => {
                        tracing::info!(
                            customer_code = %data.customer.customer_code,
                            "subscription created on processor"
                        );
                        Ok(HandleWebhookEventResult::Acknowledged)
                    }
                    Err(err) => {
                        tracing::warn!(%err, "subscription.create payload missing customer");
                        Ok(HandleWebhookEventResult::Ignored)
                    }
                }
            }
            other => {
                tracing::warn!(
                    event = other.name(),
                    payload = %envelope.data,
                    "unhandled webhook event"
                );
                Ok(HandleWebhookEventResult::Ignored)
            }
        }
    }

    async fn settle_charge(
        &self,
        envelope: &WebhookEnvelope,
    ) -> Result<HandleWebhookEventResult, BillingError> {
        let data = match ChargeSuccessData::from_value(&envelope.data) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(%err, "charge.success payload missing required fields");
                return Ok(HandleWebhookEventResult::Ignored);
            }
        };

        // References from flows other than ours (e.g. subscription renewals)
        // do not carry the plan encoding; acknowledge and move on.
        let reference = match TransactionReference::decode(&data.reference) {
            Ok(reference) => reference,
            Err(err) => {
                tracing::warn!(
                    reference = %data.reference,
                    %err,
                    "charge.success reference does not encode a plan"
                );
                return Ok(HandleWebhookEventResult::Ignored);
            }
        };

        if self
            .gateway
            .list_subscriptions(&data.customer.email)
            .await
            .map_err(BillingError::from)?
            .is_some()
        {
            tracing::info!(
                customer_code = %data.customer.customer_code,
                "charge settled for already-subscribed customer"
            );
            return Ok(HandleWebhookEventResult::AlreadySubscribed);
        }

        self.gateway
            .create_subscription(&data.customer.customer_code, reference.plan_id())
            .await
            .map_err(BillingError::from)?;

        tracing::info!(
            customer_code = %data.customer.customer_code,
            plan_id = reference.plan_id(),
            transaction_id = reference.transaction_id(),
            "customer subscribed after successful charge"
        );

        Ok(HandleWebhookEventResult::SubscriptionCreated {
            customer_code: data.customer.customer_code,
            plan_id: reference.plan_id().to_string(),
        })
    }
}
