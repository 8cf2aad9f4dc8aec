//! Paystack adapter.
//!
//! Talks to the Paystack REST API and translates its wire format into the
//! gateway port types the application layer works with.

mod api_types;
mod client;

pub use client::PaystackClient;
