//! Transaction reference encoding.
//!
//! Paystack treats the transaction reference as an opaque string. We overload
//! it to carry both the plan and the caller's transaction identifier so that
//! a later `charge.success` webhook can be correlated back to the plan the
//! customer paid for.

use std::fmt;

use thiserror::Error;

/// Fixed separator between the plan id and the transaction id.
///
/// Neither component may contain this sequence; decoding requires exactly one
/// occurrence.
pub const REFERENCE_SEPARATOR: &str = "__";

/// Errors from reference construction or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("reference component '{0}' cannot be empty")]
    EmptyComponent(&'static str),

    #[error("reference component '{0}' cannot contain '{REFERENCE_SEPARATOR}'")]
    ContainsSeparator(&'static str),

    #[error("malformed reference '{0}': expected exactly one '{REFERENCE_SEPARATOR}' separator")]
    Malformed(String),
}

/// A processor transaction reference carrying `(plan_id, transaction_id)`.
///
/// The encoded form is `<plan_id>__<transaction_id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReference {
    plan_id: String,
    transaction_id: String,
}

impl TransactionReference {
    /// Builds a reference from its components.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError` if either component is empty or contains the
    /// separator, which would make the encoding ambiguous.
    pub fn new(
        plan_id: impl Into<String>,
        transaction_id: impl Into<String>,
    ) -> Result<Self, ReferenceError> {
        let plan_id = plan_id.into();
        let transaction_id = transaction_id.into();

        if plan_id.is_empty() {
            return Err(ReferenceError::EmptyComponent("plan_id"));
        }
        if transaction_id.is_empty() {
            return Err(ReferenceError::EmptyComponent("transaction_id"));
        }
        if plan_id.contains(REFERENCE_SEPARATOR) {
            return Err(ReferenceError::ContainsSeparator("plan_id"));
        }
        if transaction_id.contains(REFERENCE_SEPARATOR) {
            return Err(ReferenceError::ContainsSeparator("transaction_id"));
        }

        Ok(Self {
            plan_id,
            transaction_id,
        })
    }

    /// Decodes an encoded reference back into `(plan_id, transaction_id)`.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::Malformed` unless the input contains exactly
    /// one separator with non-empty components on both sides.
    pub fn decode(encoded: &str) -> Result<Self, ReferenceError> {
        let mut parts = encoded.split(REFERENCE_SEPARATOR);
        let (plan_id, transaction_id) = match (parts.next(), parts.next(), parts.next()) {
            (Some(plan), Some(txn), None) => (plan, txn),
            _ => return Err(ReferenceError::Malformed(encoded.to_string())),
        };

        if plan_id.is_empty() || transaction_id.is_empty() {
            return Err(ReferenceError::Malformed(encoded.to_string()));
        }

        Ok(Self {
            plan_id: plan_id.to_string(),
            transaction_id: transaction_id.to_string(),
        })
    }

    /// The plan identifier.
    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    /// The caller-supplied transaction identifier.
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// The encoded form sent to the processor.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}",
            self.plan_id, REFERENCE_SEPARATOR, self.transaction_id
        )
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
