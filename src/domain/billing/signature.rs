//! Paystack webhook signature verification.
//!
//! Paystack signs each webhook delivery with HMAC-SHA512 over the exact raw
//! request body, keyed by the webhook signing secret, and sends the
//! hex-encoded digest in the `x-paystack-signature` header. Verification is
//! fail-closed: any mismatch, length difference, or decoding problem rejects
//! the request.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the hex-encoded HMAC-SHA512 digest.
pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// Error produced when a signature does not verify.
///
/// Deliberately carries no detail: the caller only ever turns this into an
/// unauthorized response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("webhook signature verification failed")]
pub struct SignatureMismatch;

/// Verifier for inbound webhook signatures.
pub struct WebhookVerifier {
    secret: SecretString,
}

impl WebhookVerifier {
    /// Creates a verifier keyed with the webhook signing secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies `signature` against the digest of `payload`.
    ///
    /// `signature` is the raw header value: the lowercase hex encoding of
    /// HMAC-SHA512(secret, payload). Signatures of a different length are
    /// rejected before any byte comparison; equal-length signatures are
    /// compared in constant time.
    ///
    /// # Errors
    ///
    /// Returns `SignatureMismatch` on any failure path.
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<(), SignatureMismatch> {
        let expected = self.compute_signature(payload);

        let expected_bytes = expected.as_bytes();
        let provided_bytes = signature.as_bytes();

        if expected_bytes.len() != provided_bytes.len() {
            return Err(SignatureMismatch);
        }

        if expected_bytes.ct_eq(provided_bytes).unwrap_u8() != 1 {
            return Err(SignatureMismatch);
        }

        Ok(())
    }

    /// Hex-encoded HMAC-SHA512 digest of `payload`.
    fn compute_signature(&self, payload: &[u8]) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Computes the signature a sender would attach, for use in test fixtures.
#[cfg(test)]
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
