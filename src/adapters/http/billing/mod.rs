//! Billing HTTP adapter.
//!
//! Exposes the checkout endpoints and the signature-guarded webhook endpoint.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::BillingAppState;
pub use routes::billing_router;
