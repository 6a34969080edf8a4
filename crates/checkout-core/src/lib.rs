//! # checkout-core
//!
//! Core types and contracts for the hosted checkout embedding SDK.
//!
//! This crate provides:
//! - `PurchaseInfo` and `CheckoutConfig` for describing a checkout attempt
//! - `build_checkout_url` for deriving the hosted checkout URL
//! - `CheckoutEvent` for classifying inbound cross-origin messages
//! - `CheckoutError` for typed error handling
//!
//! Everything here is host-agnostic: no DOM, no wasm. The browser embedding
//! layer lives in the `checkout-wasm` crate.
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{build_checkout_url, CheckoutConfig, PurchaseInfo};
//!
//! let purchase = PurchaseInfo::new(10.0, "Lunch", "0551234567", "ref-1");
//! let config = CheckoutConfig::external("https://example.com/cb", 12345, "abc");
//!
//! let url = build_checkout_url(&purchase, &config, "https://checkout.test");
//! // Redirect the customer to `url`, or point an iframe at it.
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod purchase;
pub mod url;

// Re-exports for convenience
pub use config::{Branding, CheckoutConfig, IntegrationType};
pub use error::{CheckoutError, CheckoutResult};
pub use event::{CheckoutEvent, Initiate, PaymentFailure, PaymentSuccess};
pub use purchase::PurchaseInfo;
pub use url::{build_checkout_url, DIRECT_PAY_PATH, PAY_PATH};
