//! Paystack REST client.
//!
//! Implements the [`PaymentGateway`] port over `reqwest`, one operation per
//! endpoint, no retries. All requests carry the secret key as a bearer token.
//!
//! # Failure policy
//!
//! Every operation funnels failures through one translation path:
//! non-2xx responses, and 2xx responses whose envelope says
//! `"status": false`, are logged and become [`GatewayError::Upstream`]
//! carrying the processor's `message` when present; transport failures and
//! response-decoding faults become [`GatewayError::Internal`] with the raw
//! message.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::PaystackConfig;
use crate::domain::billing::TransactionReference;
use crate::ports::{
    GatewayCustomer, GatewayError, NewCustomer, PaymentGateway, PaymentSession, Plan,
    SubscriptionRecord,
};

use super::api_types::{
    CreateCustomerBody, CreateSubscriptionBody, DisableSubscriptionBody, Envelope, ErrorEnvelope,
    InitializeSubscriptionBody, InitializeTransactionBody, PaystackCustomer, PaystackPlan,
    PaystackSubscription, PaystackTransactionSession,
};

/// HTTP client for the Paystack API.
pub struct PaystackClient {
    config: PaystackConfig,
    http: reqwest::Client,
}

impl PaystackClient {
    /// Creates a client from the Paystack configuration.
    pub fn new(config: PaystackConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// The checkout success URL with the transaction id appended as the
    /// query string, so the frontend can pick it back up after redirect.
    fn callback_url(&self, transaction_id: &str) -> String {
        format!("{}?{}", self.config.callback_url, transaction_id)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &'static str,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(self.config.secret_key.expose_secret())
            .send()
            .await
            .map_err(|e| GatewayError::internal(e.to_string()))?;

        self.decode(response, operation).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        operation: &'static str,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.config.secret_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::internal(e.to_string()))?;

        self.decode(response, operation).await
    }

    async fn post_ack<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        operation: &'static str,
    ) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.config.secret_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::internal(e.to_string()))?;

        self.decode_ack(response, operation).await
    }

    /// Single error-translation path for all responses.
    ///
    /// Paystack can report failure two ways: a non-2xx transport status, or a
    /// 2xx carrying `"status": false` in the envelope. Both become
    /// [`GatewayError::Upstream`] here.
    async fn decode_envelope<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<Envelope<T>, GatewayError> {
        let status = response.status();

        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            tracing::warn!(%status, operation, %payload, "Paystack API error");

            let message = serde_json::from_str::<ErrorEnvelope>(&payload)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Paystack API error".to_string());

            return Err(GatewayError::upstream(message));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| GatewayError::internal(format!("failed to parse Paystack response: {e}")))?;

        if !envelope.status {
            tracing::warn!(operation, message = %envelope.message, "Paystack reported failure in a 2xx response");
            let message = if envelope.message.is_empty() {
                "Paystack API error".to_string()
            } else {
                envelope.message
            };
            return Err(GatewayError::upstream(message));
        }

        Ok(envelope)
    }

    /// Decodes a response whose envelope must carry a payload.
    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<T, GatewayError> {
        let envelope = self.decode_envelope(response, operation).await?;
        envelope.data.ok_or_else(|| {
            GatewayError::internal(format!("Paystack response for {operation} carried no data"))
        })
    }

    /// Decodes an acknowledgement-style response, where a successful body may
    /// omit `data` entirely (e.g. `POST /subscription/disable`).
    async fn decode_ack(
        &self,
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<(), GatewayError> {
        self.decode_envelope::<serde_json::Value>(response, operation)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl PaymentGateway for PaystackClient {
    async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<GatewayCustomer, GatewayError> {
        let body = CreateCustomerBody {
            first_name: &customer.first_name,
            last_name: &customer.last_name,
            email: &customer.email,
            phone: &customer.phone_number,
        };

        let created: PaystackCustomer = self.post("/customer", &body, "create_customer").await?;
        Ok(created.into())
    }

    async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<GatewayCustomer, GatewayError> {
        let customer: PaystackCustomer = self
            .get(&format!("/customer/{email}"), "find_customer_by_email")
            .await?;
        Ok(customer.into())
    }

    async fn list_subscriptions(
        &self,
        email: &str,
    ) -> Result<Option<Vec<SubscriptionRecord>>, GatewayError> {
        let customer = self.find_customer_by_email(email).await?;

        if customer.subscriptions.is_empty() {
            Ok(None)
        } else {
            Ok(Some(customer.subscriptions))
        }
    }

    async fn initialize_transaction(
        &self,
        email: &str,
        plan_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentSession, GatewayError> {
        // The plan is the single source of truth for the charge amount.
        let plan = self.get_plan(plan_id).await?;

        let reference = TransactionReference::new(plan_id, transaction_id)
            .map_err(|e| GatewayError::internal(e.to_string()))?;

        let body = InitializeTransactionBody {
            email,
            amount: plan.amount,
            reference: reference.encode(),
            callback_url: self.callback_url(transaction_id),
        };

        let session: PaystackTransactionSession = self
            .post("/transaction/initialize", &body, "initialize_transaction")
            .await?;
        Ok(session.into())
    }

    async fn initialize_subscription(
        &self,
        email: &str,
        plan_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentSession, GatewayError> {
        let body = InitializeSubscriptionBody {
            email,
            plan: plan_id,
            reference: transaction_id,
            callback_url: self.callback_url(transaction_id),
        };

        let session: PaystackTransactionSession = self
            .post("/transaction/initialize", &body, "initialize_subscription")
            .await?;
        Ok(session.into())
    }

    async fn get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionRecord, GatewayError> {
        let subscription: PaystackSubscription = self
            .get(&format!("/subscription/{subscription_id}"), "get_subscription")
            .await?;
        Ok(subscription.into())
    }

    async fn create_subscription(
        &self,
        customer_code: &str,
        plan_id: &str,
    ) -> Result<(), GatewayError> {
        let body = CreateSubscriptionBody {
            customer: customer_code,
            plan: plan_id,
        };

        self.post_ack("/subscription/", &body, "create_subscription")
            .await
    }

    async fn cancel_subscription(
        &self,
        subscription_code: &str,
        email_token: &str,
    ) -> Result<(), GatewayError> {
        let body = DisableSubscriptionBody {
            code: subscription_code,
            token: email_token,
        };

        self.post_ack("/subscription/disable", &body, "cancel_subscription")
            .await
    }

    async fn get_plan(&self, plan_id: &str) -> Result<Plan, GatewayError> {
        let plan: PaystackPlan = self.get(&format!("/plan/{plan_id}"), "get_plan").await?;
        Ok(plan.into())
    }
}
