//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `paystack` - Paystack REST API client
//! - `http` - Inbound REST API surface

pub mod http;
pub mod paystack;

pub use paystack::PaystackClient;
