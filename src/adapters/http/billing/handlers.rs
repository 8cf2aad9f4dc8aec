//! HTTP handlers for billing endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::billing::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CreatePaymentSessionCommand,
    CreatePaymentSessionHandler, HandleWebhookEventHandler,
};
use crate::domain::billing::{BillingError, WebhookEnvelope, WebhookVerifier};
use crate::ports::PaymentGateway;

use super::dto::{
    CancelSubscriptionRequest, CreatePaymentSessionRequest, ErrorResponse, PaymentSessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; the dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct BillingAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub webhook_verifier: Arc<WebhookVerifier>,
}

impl BillingAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_payment_session_handler(&self) -> CreatePaymentSessionHandler {
        CreatePaymentSessionHandler::new(self.gateway.clone())
    }

    pub fn cancel_subscription_handler(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.gateway.clone())
    }

    pub fn webhook_event_handler(&self) -> HandleWebhookEventHandler {
        HandleWebhookEventHandler::new(self.gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /paystack/create - Start a checkout session for a plan
pub async fn create_payment_session(
    State(state): State<BillingAppState>,
    Json(request): Json<CreatePaymentSessionRequest>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.create_payment_session_handler();
    let cmd = CreatePaymentSessionCommand {
        customer: request.customer.into(),
        plan_id: request.plan_id,
        transaction_id: request.transaction_id,
    };

    let session = handler.handle(cmd).await?;

    let response = PaymentSessionResponse::from(session);
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /paystack/cancel - Cancel the customer's subscription
pub async fn cancel_subscription(
    State(state): State<BillingAppState>,
    Json(request): Json<CancelSubscriptionRequest>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.cancel_subscription_handler();
    let cmd = CancelSubscriptionCommand {
        email: request.email,
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /paystack/webhook-events - Process a verified webhook delivery
///
/// The signature middleware has already authenticated the payload by the time
/// this handler runs. Events the service cannot act on are still acknowledged
/// with 200 so the processor stops retrying them.
pub async fn handle_webhook_event(
    State(state): State<BillingAppState>,
    Json(envelope): Json<WebhookEnvelope>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.webhook_event_handler();

    handler.handle(envelope).await?;

    Ok(StatusCode::OK)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts billing errors to HTTP responses.
pub struct BillingApiError(BillingError);

impl From<BillingError> for BillingApiError {
    fn from(err: BillingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BillingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            BillingError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            BillingError::AlreadySubscribed => (StatusCode::BAD_REQUEST, "ALREADY_SUBSCRIBED"),
            BillingError::NoActiveSubscription => {
                (StatusCode::BAD_REQUEST, "NO_ACTIVE_SUBSCRIPTION")
            }
            // Processor rejections surface to the caller with the processor's
            // message, matching how validation failures are reported.
            BillingError::Upstream(_) => (StatusCode::BAD_REQUEST, "UPSTREAM_REJECTED"),
            BillingError::AmbiguousSubscriptions { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SUBSCRIPTION_STATE_AMBIGUOUS",
            ),
            BillingError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::billing::support::{subscription, MockGateway};
    use secrecy::SecretString;
    use serde_json::json;

    fn test_state_with(gateway: Arc<MockGateway>) -> BillingAppState {
        BillingAppState {
            gateway,
            webhook_verifier: Arc::new(WebhookVerifier::new(SecretString::new(
                "sk_test_secret".to_string(),
            ))),
        }
    }

    fn test_request() -> CreatePaymentSessionRequest {
        serde_json::from_value(json!({
            "customer": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "phoneNumber": "+2348012345678"
            },
            "planId": "PLN_x1",
            "transactionId": "txn-42"
        }))
        .unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Handler Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn create_payment_session_returns_created() {
        let state = test_state_with(Arc::new(MockGateway::new()));

        let result = create_payment_session(State(state), Json(test_request())).await;
        let response = result.into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_payment_session_rejects_subscribed_customer() {
        let gateway = Arc::new(MockGateway::with_subscriptions(vec![subscription(
            "SUB_1", "tok_1",
        )]));
        let state = test_state_with(gateway);

        let result = create_payment_session(State(state), Json(test_request())).await;
        let response = result.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cancel_subscription_returns_no_content() {
        let gateway = Arc::new(MockGateway::with_subscriptions(vec![subscription(
            "SUB_1", "tok_1",
        )]));
        let state = test_state_with(gateway);

        let request = CancelSubscriptionRequest {
            email: "ada@example.com".to_string(),
        };
        let result = cancel_subscription(State(state), Json(request)).await;
        let response = result.into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn webhook_event_acknowledges_unhandled_events() {
        let state = test_state_with(Arc::new(MockGateway::new()));

        let envelope: WebhookEnvelope = serde_json::from_value(json!({
            "event": "invoice.update",
            "data": {}
        }))
        .unwrap();

        let result = handle_webhook_event(State(state), Json(envelope)).await;
        let response = result.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn api_error_maps_validation_to_400() {
        let err = BillingApiError(BillingError::validation("plan_id", "required"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_already_subscribed_to_400() {
        let err = BillingApiError(BillingError::AlreadySubscribed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_no_active_subscription_to_400() {
        let err = BillingApiError(BillingError::NoActiveSubscription);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_upstream_to_400() {
        let err = BillingApiError(BillingError::upstream("Invalid plan code"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_ambiguous_subscriptions_to_500() {
        let err = BillingApiError(BillingError::AmbiguousSubscriptions { count: 2 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn api_error_maps_internal_to_500() {
        let err = BillingApiError(BillingError::internal("connection refused"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
