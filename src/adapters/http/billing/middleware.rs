//! Webhook signature verification middleware.
//!
//! Runs before the webhook route handler. The raw body is buffered, the
//! `x-paystack-signature` header is checked against its HMAC-SHA512 digest,
//! and the request is rebuilt for the handler only when verification passes.
//! Verification must happen on the raw bytes: re-serializing parsed JSON
//! would not reproduce the exact payload Paystack signed.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::billing::SIGNATURE_HEADER;

use super::dto::ErrorResponse;
use super::handlers::BillingAppState;

/// Upper bound on a buffered webhook body.
const MAX_WEBHOOK_BODY_BYTES: usize = 1024 * 1024;

/// Rejects webhook deliveries whose signature is missing or wrong.
pub async fn verify_webhook_signature(
    State(state): State<BillingAppState>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, MAX_WEBHOOK_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(%err, "failed to buffer webhook body");
            return unauthorized("Invalid signature");
        }
    };

    let signature = match parts
        .headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(signature) => signature,
        None => {
            tracing::warn!("webhook delivery without signature header");
            return unauthorized("No signature provided");
        }
    };

    if state.webhook_verifier.verify(&bytes, signature).is_err() {
        tracing::warn!("webhook signature verification failed");
        return unauthorized("Invalid signature");
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}

fn unauthorized(message: &str) -> Response {
    let body = ErrorResponse::new("INVALID_WEBHOOK_SIGNATURE", message);
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::billing::support::MockGateway;
    use crate::domain::billing::{sign_payload, WebhookVerifier};
    use axum::middleware;
    use axum::routing::post;
    use axum::Router;
    use secrecy::SecretString;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    const SECRET: &str = "sk_test_secret";

    fn test_app() -> Router {
        let state = BillingAppState {
            gateway: Arc::new(MockGateway::new()),
            webhook_verifier: Arc::new(WebhookVerifier::new(SecretString::new(
                SECRET.to_string(),
            ))),
        };

        Router::new()
            .route("/webhook-events", post(|| async { StatusCode::OK }))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                verify_webhook_signature,
            ))
            .with_state(state)
    }

    fn webhook_request(body: &str, signature: Option<&str>) -> Request {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/webhook-events")
            .header("content-type", "application/json");
        if let Some(signature) = signature {
            builder = builder.header(SIGNATURE_HEADER, signature);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn passes_through_with_valid_signature() {
        let body = r#"{"event":"charge.success","data":{}}"#;
        let signature = sign_payload(SECRET, body.as_bytes());

        let response = test_app()
            .oneshot(webhook_request(body, Some(&signature)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_missing_signature() {
        let response = test_app()
            .oneshot(webhook_request(r#"{"event":"x","data":{}}"#, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_wrong_signature() {
        let body = r#"{"event":"charge.success","data":{}}"#;
        let signature = sign_payload("some-other-secret", body.as_bytes());

        let response = test_app()
            .oneshot(webhook_request(body, Some(&signature)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_signature_of_different_body() {
        let signature = sign_payload(SECRET, br#"{"event":"charge.success","data":{}}"#);

        let response = test_app()
            .oneshot(webhook_request(
                r#"{"event":"charge.success","data":{"amount":1}}"#,
                Some(&signature),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
