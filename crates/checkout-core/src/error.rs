//! # Checkout Error Types
//!
//! Typed error handling for the checkout embedding SDK. Only the opt-in
//! validation surface produces these; the embed path itself degrades to
//! silent no-ops rather than erroring.

use thiserror::Error;

/// Core error type for checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing or malformed config values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid purchase data
    #[error("Invalid purchase: {0}")]
    InvalidPurchase(String),

    /// A credential required by the selected integration type is missing
    #[error("Missing credential for {integration} integration: {field}")]
    MissingCredential {
        integration: &'static str,
        field: &'static str,
    },
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
