//! Billing Gateway - Paystack payment integration service
//!
//! This crate exposes checkout-session creation and subscription management
//! over a small REST API, and processes signed Paystack webhook deliveries.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
