//! HTTP DTOs (Data Transfer Objects) for billing endpoints.
//!
//! These types define the JSON request/response structure for the billing API.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::ports::{NewCustomer, PaymentSession};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a checkout session for a plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentSessionRequest {
    /// The paying customer's details.
    pub customer: CustomerDto,

    /// Paystack plan code to charge for.
    #[serde(default)]
    pub plan_id: String,

    /// Caller-assigned transaction identifier.
    #[serde(default)]
    pub transaction_id: String,
}

/// Customer details carried in the create request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<CustomerDto> for NewCustomer {
    fn from(dto: CustomerDto) -> Self {
        NewCustomer {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone_number: dto.phone_number,
        }
    }
}

/// Request to cancel the subscription held by a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelSubscriptionRequest {
    /// Email of the subscribed customer.
    #[serde(default)]
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Checkout session artifacts returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSessionResponse {
    /// Hosted checkout URL to redirect the customer to.
    pub authorization_url: String,

    /// Processor access code for the session.
    pub access_code: String,

    /// The transaction reference.
    pub reference: String,
}

impl From<PaymentSession> for PaymentSessionResponse {
    fn from(session: PaymentSession) -> Self {
        PaymentSessionResponse {
            authorization_url: session.authorization_url,
            access_code: session.access_code,
            reference: session.reference,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
