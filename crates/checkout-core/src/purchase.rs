//! # Purchase Types
//!
//! The per-attempt purchase description supplied by the host application.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};

/// The purchase being checked out.
///
/// Immutable input, supplied once per checkout attempt. The phone number
/// format is not validated at this layer; the hosted checkout page owns
/// that rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInfo {
    /// The amount to be paid
    pub amount: f64,

    /// Description of the purchase
    pub purchase_description: String,

    /// The customer's phone number
    pub customer_phone_number: String,

    /// Caller-supplied idempotency/reconciliation key
    pub client_reference: String,
}

impl PurchaseInfo {
    /// Create a new purchase description
    pub fn new(
        amount: f64,
        purchase_description: impl Into<String>,
        customer_phone_number: impl Into<String>,
        client_reference: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            purchase_description: purchase_description.into(),
            customer_phone_number: customer_phone_number.into(),
            client_reference: client_reference.into(),
        }
    }

    /// Validate the required purchase fields.
    ///
    /// The embed path does not call this; it is offered to hosts that want
    /// to fail before presenting a checkout surface.
    pub fn validate(&self) -> CheckoutResult<()> {
        if !(self.amount > 0.0) {
            return Err(CheckoutError::InvalidPurchase(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if self.purchase_description.is_empty() {
            return Err(CheckoutError::InvalidPurchase(
                "purchase description must not be empty".to_string(),
            ));
        }
        if self.client_reference.is_empty() {
            return Err(CheckoutError::InvalidPurchase(
                "client reference must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
