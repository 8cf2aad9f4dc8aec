//! CreatePaymentSessionHandler - Command handler for starting a checkout session.

use std::sync::Arc;

use crate::domain::billing::{BillingError, ReferenceError, TransactionReference};
use crate::ports::{NewCustomer, PaymentGateway, PaymentSession};

/// Command to start a hosted checkout session for a plan.
#[derive(Debug, Clone)]
pub struct CreatePaymentSessionCommand {
    pub customer: NewCustomer,
    pub plan_id: String,
    pub transaction_id: String,
}

/// Handler for starting a checkout session.
///
/// Upserts the customer on the processor, rejects customers who already hold
/// a subscription, then initializes a one-off charge for the plan's cost.
/// The returned session carries the authorization URL the customer is
/// redirected to.
pub struct CreatePaymentSessionHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreatePaymentSessionHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentSessionCommand,
    ) -> Result<PaymentSession, BillingError> {
        // 1. Validate inputs before any processor round trip
        if cmd.plan_id.is_empty() {
            return Err(BillingError::validation(
                "plan_id",
                "Paystack plan ID is required",
            ));
        }
        if cmd.transaction_id.is_empty() {
            return Err(BillingError::validation(
                "transaction_id",
                "transaction ID is required",
            ));
        }

        // Components that would make the reference ambiguous are rejected
        // here, not deep inside the gateway call.
        TransactionReference::new(&cmd.plan_id, &cmd.transaction_id)
            .map_err(Self::reference_to_validation)?;

        // 2. Create (or upsert) the customer
        let customer = self
            .gateway
            .create_customer(&cmd.customer)
            .await
            .map_err(BillingError::from)?;

        // 3. Reject customers who already hold a subscription
        if self
            .gateway
            .list_subscriptions(&customer.email)
            .await
            .map_err(BillingError::from)?
            .is_some()
        {
            return Err(BillingError::AlreadySubscribed);
        }

        // 4. Initialize the charge and hand back the checkout artifacts
        let session = self
            .gateway
            .initialize_transaction(&customer.email, &cmd.plan_id, &cmd.transaction_id)
            .await
            .map_err(BillingError::from)?;

        Ok(session)
    }

    fn reference_to_validation(err: ReferenceError) -> BillingError {
        let field = match err {
            ReferenceError::EmptyComponent(field) | ReferenceError::ContainsSeparator(field) => {
                field
            }
            ReferenceError::Malformed(_) => "reference",
        };
        BillingError::validation(field, err.to_string())
    }
}
