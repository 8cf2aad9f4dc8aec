//! Payment gateway port for the Paystack REST API.
//!
//! One trait operation per processor endpoint, each a single request/response
//! round trip with no retries. Adapters translate every failure into
//! [`GatewayError`]: processor rejections become `Upstream` (carrying the
//! processor's message when present), everything else becomes `Internal`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::billing::BillingError;

/// Port for the payment processor integration.
///
/// Implementations perform the actual HTTP round trips; the orchestration
/// handlers depend only on this trait.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create (or upsert, per processor semantics) a customer.
    ///
    /// Paystack customer creation is idempotent by email, so no client-side
    /// uniqueness check is performed.
    async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<GatewayCustomer, GatewayError>;

    /// Fetch a customer by email, the source of truth for subscription
    /// lookups.
    async fn find_customer_by_email(&self, email: &str)
        -> Result<GatewayCustomer, GatewayError>;

    /// List a customer's subscriptions.
    ///
    /// An empty list and "no subscriptions" are equivalent and collapse into
    /// `None`.
    async fn list_subscriptions(
        &self,
        email: &str,
    ) -> Result<Option<Vec<SubscriptionRecord>>, GatewayError>;

    /// Start a one-off charge for the plan's cost.
    ///
    /// Looks up the plan amount first, then initializes a transaction whose
    /// reference encodes `(plan_id, transaction_id)` so the later
    /// `charge.success` webhook can be correlated.
    async fn initialize_transaction(
        &self,
        email: &str,
        plan_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentSession, GatewayError>;

    /// Start a recurring charge tied directly to the plan.
    ///
    /// Only card payments can be charged automatically; the processor
    /// enforces that constraint, not this client.
    async fn initialize_subscription(
        &self,
        email: &str,
        plan_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentSession, GatewayError>;

    /// Fetch a subscription's detail record.
    async fn get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionRecord, GatewayError>;

    /// Attach a customer to a plan.
    async fn create_subscription(
        &self,
        customer_code: &str,
        plan_id: &str,
    ) -> Result<(), GatewayError>;

    /// Disable a subscription using its processor-issued code and token.
    async fn cancel_subscription(
        &self,
        subscription_code: &str,
        email_token: &str,
    ) -> Result<(), GatewayError>;

    /// Fetch a plan, primarily for its cost.
    async fn get_plan(&self, plan_id: &str) -> Result<Plan, GatewayError>;
}

/// Customer details supplied by the caller of the payment-session flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    /// Natural identifier for lookups.
    pub email: String,
    pub phone_number: String,
}

/// Customer record as known to the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayCustomer {
    /// Processor customer code (`CUS_...`).
    pub customer_code: String,

    /// Customer email.
    pub email: String,

    /// The customer's subscriptions, as returned on the customer record.
    pub subscriptions: Vec<SubscriptionRecord>,
}

/// A subscription owned by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Processor subscription code (`SUB_...`).
    pub subscription_code: String,

    /// Token required alongside the code to disable the subscription.
    pub email_token: String,

    /// Processor-reported status, passed through verbatim.
    pub status: Option<String>,
}

/// Artifacts for completing payment in the hosted checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// URL the end customer is redirected to.
    pub authorization_url: String,

    /// Processor-issued access code for the checkout session.
    pub access_code: String,

    /// The transaction reference echoed back by the processor.
    pub reference: String,
}

/// A priced subscription tier defined on the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Processor plan code (`PLN_...`).
    pub plan_code: String,

    /// Human-readable plan name.
    pub name: String,

    /// Plan cost in the currency subunit.
    pub amount: u64,
}

/// Errors from gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The processor rejected the call; message passed through when present.
    #[error("Paystack API error: {0}")]
    Upstream(String),

    /// Transport failure or any fault not attributable to the processor.
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Creates an upstream error from the processor's message.
    pub fn upstream(message: impl Into<String>) -> Self {
        GatewayError::Upstream(message.into())
    }

    /// Creates an internal error from a raw message.
    pub fn internal(message: impl Into<String>) -> Self {
        GatewayError::Internal(message.into())
    }
}

impl From<GatewayError> for BillingError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream(message) => BillingError::Upstream(message),
            GatewayError::Internal(message) => BillingError::Internal(message),
        }
    }
}
