//! Axum router configuration for billing endpoints.

use axum::middleware;
use axum::routing::post;
use axum::Router;

use super::handlers::{
    cancel_subscription, create_payment_session, handle_webhook_event, BillingAppState,
};
use super::middleware::verify_webhook_signature;

/// Create the checkout API router.
///
/// # Routes
/// - `POST /create` - Start a checkout session for a plan
/// - `POST /cancel` - Cancel the customer's subscription
pub fn checkout_routes() -> Router<BillingAppState> {
    Router::new()
        .route("/create", post(create_payment_session))
        .route("/cancel", post(cancel_subscription))
}

/// Create the webhook router.
///
/// Separate from the checkout routes because deliveries are authenticated by
/// signature, not by a caller identity. The verification middleware is scoped
/// to this route only.
///
/// # Routes
/// - `POST /webhook-events` - Process a signed Paystack delivery
pub fn webhook_routes(state: BillingAppState) -> Router<BillingAppState> {
    Router::new()
        .route("/webhook-events", post(handle_webhook_event))
        .route_layer(middleware::from_fn_with_state(
            state,
            verify_webhook_signature,
        ))
}

/// Create the complete billing module router, mounted at `/paystack`.
pub fn billing_router(state: BillingAppState) -> Router {
    Router::new()
        .nest(
            "/paystack",
            checkout_routes().merge(webhook_routes(state.clone())),
        )
        .with_state(state)
}
