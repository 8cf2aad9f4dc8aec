//! Paystack API wire types.
//!
//! Every Paystack response wraps its payload in a `{status, message, data}`
//! envelope. The types here mirror only the fields this service reads;
//! unknown fields are ignored by serde.

use serde::{Deserialize, Serialize};

use crate::ports::{GatewayCustomer, PaymentSession, Plan, SubscriptionRecord};

/// Standard Paystack response envelope.
///
/// `data` is optional on the wire: acknowledgement-style responses (e.g.
/// `POST /subscription/disable`) omit it or send null, so the decoder must
/// not require it.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// True when the call succeeded. Paystack can pair this with a 2xx
    /// transport status, so it is checked independently.
    pub status: bool,

    /// Human-readable status message.
    #[serde(default)]
    pub message: String,

    /// The payload, when the operation returns one.
    #[serde(default)]
    pub data: Option<T>,
}

/// Error body returned on non-2xx responses (`data` is absent or null).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub message: Option<String>,
}

/// Customer record on the Paystack side.
#[derive(Debug, Clone, Deserialize)]
pub struct PaystackCustomer {
    pub customer_code: String,
    pub email: String,
    #[serde(default)]
    pub subscriptions: Vec<PaystackSubscription>,
}

impl From<PaystackCustomer> for GatewayCustomer {
    fn from(customer: PaystackCustomer) -> Self {
        GatewayCustomer {
            customer_code: customer.customer_code,
            email: customer.email,
            subscriptions: customer
                .subscriptions
                .into_iter()
                .map(SubscriptionRecord::from)
                .collect(),
        }
    }
}

/// Subscription record as embedded in customer responses and returned by
/// `GET /subscription/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaystackSubscription {
    pub subscription_code: String,
    pub email_token: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<PaystackSubscription> for SubscriptionRecord {
    fn from(subscription: PaystackSubscription) -> Self {
        SubscriptionRecord {
            subscription_code: subscription.subscription_code,
            email_token: subscription.email_token,
            status: subscription.status,
        }
    }
}

/// Payload of `POST /transaction/initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaystackTransactionSession {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

impl From<PaystackTransactionSession> for PaymentSession {
    fn from(session: PaystackTransactionSession) -> Self {
        PaymentSession {
            authorization_url: session.authorization_url,
            access_code: session.access_code,
            reference: session.reference,
        }
    }
}

/// Plan record from `GET /plan/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaystackPlan {
    pub plan_code: String,
    pub name: String,
    /// Cost in the currency subunit (e.g. kobo).
    pub amount: u64,
}

impl From<PaystackPlan> for Plan {
    fn from(plan: PaystackPlan) -> Self {
        Plan {
            plan_code: plan.plan_code,
            name: plan.name,
            amount: plan.amount,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request bodies
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /customer`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCustomerBody<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

/// Body of `POST /transaction/initialize` for a one-off charge.
#[derive(Debug, Clone, Serialize)]
pub struct InitializeTransactionBody<'a> {
    pub email: &'a str,
    pub amount: u64,
    pub reference: String,
    pub callback_url: String,
}

/// Body of `POST /transaction/initialize` for a recurring charge.
#[derive(Debug, Clone, Serialize)]
pub struct InitializeSubscriptionBody<'a> {
    pub email: &'a str,
    pub plan: &'a str,
    pub reference: &'a str,
    pub callback_url: String,
}

/// Body of `POST /subscription/`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubscriptionBody<'a> {
    pub customer: &'a str,
    pub plan: &'a str,
}

/// Body of `POST /subscription/disable`.
#[derive(Debug, Clone, Serialize)]
pub struct DisableSubscriptionBody<'a> {
    pub code: &'a str,
    pub token: &'a str,
}
