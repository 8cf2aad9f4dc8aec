//! Paystack webhook events.
//!
//! The event enum is an allow-list of the names Paystack currently sends; it
//! exists for readable dispatch, not validation. Names outside the list map
//! to `Unknown` and are handled exactly like recognized-but-unhandled events.

use serde::{Deserialize, Serialize};

/// Webhook event names sent by Paystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaystackEvent {
    /// A one-off charge completed successfully (`charge.success`).
    ChargeSuccess,
    /// A subscription was created (`subscription.create`).
    SubscriptionCreate,
    /// `invoice.create`
    InvoiceCreate,
    /// `invoice.payment_failed`
    InvoicePaymentFailed,
    /// `invoice.update`
    InvoiceUpdate,
    /// `paymentrequest.pending`
    PaymentRequestPending,
    /// `paymentrequest.success`
    PaymentRequestSuccess,
    /// `refund.pending`
    RefundPending,
    /// `subscription.not_renew`
    SubscriptionNotRenew,
    /// `subscription.expiring_cards`
    SubscriptionExpiringCards,
    /// `charge.dispute.create`
    ChargeDisputeCreate,
    /// `customeridentification.failed`
    CustomerIdentificationFailed,
    /// Any event name outside the allow-list.
    Unknown(String),
}

impl PaystackEvent {
    /// Maps a wire event name to its variant.
    pub fn from_name(name: &str) -> Self {
        match name {
            "charge.success" => PaystackEvent::ChargeSuccess,
            "subscription.create" => PaystackEvent::SubscriptionCreate,
            "invoice.create" => PaystackEvent::InvoiceCreate,
            "invoice.payment_failed" => PaystackEvent::InvoicePaymentFailed,
            "invoice.update" => PaystackEvent::InvoiceUpdate,
            "paymentrequest.pending" => PaystackEvent::PaymentRequestPending,
            "paymentrequest.success" => PaystackEvent::PaymentRequestSuccess,
            "refund.pending" => PaystackEvent::RefundPending,
            "subscription.not_renew" => PaystackEvent::SubscriptionNotRenew,
            "subscription.expiring_cards" => PaystackEvent::SubscriptionExpiringCards,
            "charge.dispute.create" => PaystackEvent::ChargeDisputeCreate,
            "customeridentification.failed" => PaystackEvent::CustomerIdentificationFailed,
            other => PaystackEvent::Unknown(other.to_string()),
        }
    }

    /// The wire name for this event.
    pub fn name(&self) -> &str {
        match self {
            PaystackEvent::ChargeSuccess => "charge.success",
            PaystackEvent::SubscriptionCreate => "subscription.create",
            PaystackEvent::InvoiceCreate => "invoice.create",
            PaystackEvent::InvoicePaymentFailed => "invoice.payment_failed",
            PaystackEvent::InvoiceUpdate => "invoice.update",
            PaystackEvent::PaymentRequestPending => "paymentrequest.pending",
            PaystackEvent::PaymentRequestSuccess => "paymentrequest.success",
            PaystackEvent::RefundPending => "refund.pending",
            PaystackEvent::SubscriptionNotRenew => "subscription.not_renew",
            PaystackEvent::SubscriptionExpiringCards => "subscription.expiring_cards",
            PaystackEvent::ChargeDisputeCreate => "charge.dispute.create",
            PaystackEvent::CustomerIdentificationFailed => "customeridentification.failed",
            PaystackEvent::Unknown(name) => name,
        }
    }
}

/// The envelope Paystack POSTs to the webhook endpoint.
///
/// `data` is event-specific; branches that act on it extract a typed view
/// with [`ChargeSuccessData::from_value`] and friends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    /// Event name, e.g. `charge.success`.
    pub event: String,

    /// Event-specific payload.
    pub data: serde_json::Value,
}

impl WebhookEnvelope {
    /// The event variant for this envelope.
    pub fn event(&self) -> PaystackEvent {
        PaystackEvent::from_name(&self.event)
    }
}

/// Customer fields carried in webhook payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookCustomer {
    /// Paystack customer code (`CUS_...`), used for subscription creation.
    pub customer_code: String,

    /// Customer email, the natural identifier for lookups.
    pub email: String,
}

/// Typed view of a `charge.success` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeSuccessData {
    /// The transaction reference supplied at initialization.
    pub reference: String,

    /// The paying customer.
    pub customer: WebhookCustomer,
}

impl ChargeSuccessData {
    /// Extracts the typed view from the envelope's `data` field.
    pub fn from_value(data: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(data.clone())
    }
}

/// Typed view of a `subscription.create` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionCreateData {
    /// The subscribed customer.
    pub customer: WebhookCustomer,
}

impl SubscriptionCreateData {
    /// Extracts the typed view from the envelope's `data` field.
    pub fn from_value(data: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_name_maps_known_events() {
        assert_eq!(
            PaystackEvent::from_name("charge.success"),
            PaystackEvent::ChargeSuccess
        );
        assert_eq!(
            PaystackEvent::from_name("subscription.create"),
            PaystackEvent::SubscriptionCreate
        );
        assert_eq!(
            PaystackEvent::from_name("invoice.payment_failed"),
            PaystackEvent::InvoicePaymentFailed
        );
    }

    #[test]
    fn from_name_maps_unknown_events() {
        let event = PaystackEvent::from_name("some.future.event");
        assert_eq!(event, PaystackEvent::Unknown("some.future.event".to_string()));
        assert_eq!(event.name(), "some.future.event");
    }

    #[test]
    fn name_round_trips_for_known_events() {
        for name in [
            "charge.success",
            "subscription.create",
            "invoice.create",
            "invoice.update",
            "paymentrequest.pending",
            "paymentrequest.success",
            "refund.pending",
            "subscription.not_renew",
            "subscription.expiring_cards",
            "charge.dispute.create",
            "customeridentification.failed",
        ] {
            assert_eq!(PaystackEvent::from_name(name).name(), name);
        }
    }

    #[test]
    fn envelope_deserializes_and_dispatches() {
        let envelope: WebhookEnvelope = serde_json::from_value(json!({
            "event": "charge.success",
            "data": {
                "reference": "P1__T1",
                "customer": {
                    "customer_code": "CUS_abc",
                    "email": "ada@example.com"
                }
            }
        }))
        .unwrap();

        assert_eq!(envelope.event(), PaystackEvent::ChargeSuccess);

        let data = ChargeSuccessData::from_value(&envelope.data).unwrap();
        assert_eq!(data.reference, "P1__T1");
        assert_eq!(data.customer.customer_code, "CUS_abc");
        assert_eq!(data.customer.email, "ada@example.com");
    }

    #[test]
    fn charge_success_extraction_fails_on_missing_fields() {
        let data = json!({ "customer": { "customer_code": "CUS_x", "email": "a@b.c" } });
        assert!(ChargeSuccessData::from_value(&data).is_err());
    }

    #[test]
    fn subscription_create_extraction() {
        let data = json!({
            "customer": { "customer_code": "CUS_y", "email": "z@example.com" },
            "plan": { "name": "Pro" }
        });
        let parsed = SubscriptionCreateData::from_value(&data).unwrap();
        assert_eq!(parsed.customer.customer_code, "CUS_y");
    }
}
