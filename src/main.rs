//! Billing gateway service entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use billing_gateway::adapters::http::{billing_router, BillingAppState};
use billing_gateway::adapters::PaystackClient;
use billing_gateway::config::AppConfig;
use billing_gateway::domain::billing::WebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    if config.paystack.is_test_mode() {
        tracing::info!("Paystack configured with a test key");
    }

    let state = BillingAppState {
        gateway: Arc::new(PaystackClient::new(config.paystack.clone())),
        webhook_verifier: Arc::new(WebhookVerifier::new(config.paystack.webhook_secret.clone())),
    };

    let mut app = Router::new()
        .route("/health", get(health))
        .merge(billing_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let origins = config.server.cors_allowed_origins();
    if !origins.is_empty() {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.server.bind_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "billing gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}
