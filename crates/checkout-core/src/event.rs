//! # Inbound Checkout Events
//!
//! The hosted checkout page reports lifecycle and result events through an
//! untyped cross-origin message stream. This module classifies each raw
//! payload into a discriminated [`CheckoutEvent`], mirroring the shape rules
//! of the hosted page's contract: first match wins, mutually exclusive.
//!
//! Origin validation happens before classification, in the embedding layer;
//! by the time a payload reaches [`CheckoutEvent::classify`] it is already
//! known to come from the checkout origin.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Payload sent once the checkout page has initialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiate {
    /// Whether the checkout has been initialized
    pub initialized: bool,
}

/// Payload for a successful payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccess {
    /// Always `true` for this variant
    pub success: bool,

    /// The customer's mobile number
    #[serde(default)]
    pub mobile_number: String,

    /// JSON string of payment data
    #[serde(default)]
    pub data: String,
}

/// Payload for a failed payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFailure {
    /// Always `false` for this variant
    pub success: bool,

    /// Reason for the failure
    #[serde(default)]
    pub message: String,

    /// The customer's mobile number
    #[serde(default)]
    pub mobile_number: String,

    /// JSON string of payment data
    #[serde(default)]
    pub data: String,
}

/// A classified inbound message from the checkout page.
///
/// Shapes the contract does not know map to [`CheckoutEvent::Unclassified`]
/// rather than being silently swallowed; the embedding layer drops them
/// after the classifier has logged the shape at `debug`.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutEvent {
    /// Payment completed successfully
    PaymentSucceeded(PaymentSuccess),

    /// Payment failed
    PaymentFailed(PaymentFailure),

    /// Checkout page finished initializing
    Initiated(Initiate),

    /// Fees changed; carries the nested `fees` field
    FeesChanged(Value),

    /// The embedded page requested a resize; carries the full payload
    Resized(Value),

    /// Payload matched no known shape
    Unclassified(Value),
}

impl CheckoutEvent {
    /// Classify a raw message payload.
    ///
    /// Matches the hosted page's duck-typed dispatch: a strict-boolean
    /// `success` selects the payment variants, then truthy `initialized`,
    /// `feesChanged` and `resize` are tried in that order. A payload that
    /// selects a branch but fails typed decoding degrades to
    /// `Unclassified`.
    pub fn classify(payload: Value) -> Self {
        match payload.get("success") {
            Some(Value::Bool(true)) => {
                return match serde_json::from_value(payload.clone()) {
                    Ok(success) => CheckoutEvent::PaymentSucceeded(success),
                    Err(_) => Self::unclassified(payload),
                };
            }
            Some(Value::Bool(false)) => {
                return match serde_json::from_value(payload.clone()) {
                    Ok(failure) => CheckoutEvent::PaymentFailed(failure),
                    Err(_) => Self::unclassified(payload),
                };
            }
            _ => {}
        }

        if payload.get("initialized").is_some_and(is_truthy) {
            return CheckoutEvent::Initiated(Initiate { initialized: true });
        }

        if payload.get("feesChanged").is_some_and(is_truthy) {
            let fees = payload.get("fees").cloned().unwrap_or(Value::Null);
            return CheckoutEvent::FeesChanged(fees);
        }

        if payload.get("resize").is_some_and(is_truthy) {
            return CheckoutEvent::Resized(payload);
        }

        Self::unclassified(payload)
    }

    fn unclassified(payload: Value) -> Self {
        debug!(%payload, "dropping unclassified checkout message");
        CheckoutEvent::Unclassified(payload)
    }
}

/// JavaScript truthiness for a JSON value.
///
/// The hosted page's contract gates the `initialized`/`feesChanged`/`resize`
/// branches on truthiness, not on strict booleans.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
