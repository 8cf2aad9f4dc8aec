//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod payment_gateway;

pub use payment_gateway::{
    GatewayCustomer, GatewayError, NewCustomer, PaymentGateway, PaymentSession, Plan,
    SubscriptionRecord,
};
