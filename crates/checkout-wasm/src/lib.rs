//! # checkout-wasm
//!
//! Browser embedding layer for the hosted checkout SDK.
//!
//! This crate provides:
//! - `CheckoutSdk`: the facade for the three delivery modes
//!   (full-page redirect, inline iframe, modal overlay)
//! - `CheckoutCallbacks`: the typed handler set for checkout events
//! - `IframeStyle`: sizing overrides for the inline iframe
//!
//! The pure parts (URL construction, event classification, config and
//! purchase types) live in `checkout-core` and are re-exported here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_wasm::{CheckoutCallbacks, CheckoutSdk};
//! use checkout_core::{CheckoutConfig, PurchaseInfo};
//!
//! let sdk = CheckoutSdk::new();
//! let purchase = PurchaseInfo::new(10.0, "Lunch", "0551234567", "ref-1");
//! let config = CheckoutConfig::external("https://example.com/cb", 12345, "abc");
//!
//! let callbacks = CheckoutCallbacks::new()
//!     .on_payment_success(|payment| { /* fulfil */ })
//!     .on_close(|| { /* restore the host page */ });
//!
//! sdk.open_modal(&purchase, callbacks, &config);
//! ```

pub mod callbacks;
pub mod surface;

mod relay;
mod styles;

pub use callbacks::CheckoutCallbacks;
pub use surface::{IframeStyle, IFRAME_CONTAINER_ID};

// Re-export the core contract types hosts interact with.
pub use checkout_core::{
    build_checkout_url, Branding, CheckoutConfig, CheckoutError, CheckoutEvent, CheckoutResult,
    Initiate, IntegrationType, PaymentFailure, PaymentSuccess, PurchaseInfo,
};

use relay::MessageRelay;
use std::cell::RefCell;
use std::rc::Rc;
use surface::ModalSession;

/// Production checkout origin, used when no override is given
pub const DEFAULT_BASE_URL: &str = "https://unified-pay.hubtel.com";

/// Facade for embedding the hosted checkout into the current page.
///
/// Holds the configured checkout origin (overridable for staging), the
/// message relay, and the active modal session, of which there is at most
/// one. Every operation returns immediately after scheduling DOM work and
/// degrades to a silent no-op when the DOM it needs is missing.
pub struct CheckoutSdk {
    base_url: String,
    relay: MessageRelay,
    modal: Rc<RefCell<Option<ModalSession>>>,
}

impl CheckoutSdk {
    /// Create an SDK targeting the production checkout origin
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create an SDK targeting a different checkout origin (e.g. staging).
    ///
    /// The origin is used both to build checkout URLs and as the required
    /// sender origin for inbound messages, so it must be a bare
    /// scheme+host[+port] with no path.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            relay: MessageRelay::new(base_url.clone()),
            base_url,
            modal: Rc::new(RefCell::new(None)),
        }
    }

    /// The configured checkout origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Navigate to the checkout page in a new browsing context.
    ///
    /// Terminal: control leaves the host page entirely, and results arrive
    /// only at the configured server-side callback URL.
    pub fn redirect(&self, purchase: &PurchaseInfo, config: &CheckoutConfig) {
        let url = build_checkout_url(purchase, config, &self.base_url);
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url(&url);
        }
    }

    /// Mount the checkout inline, into the host element with id
    /// [`IFRAME_CONTAINER_ID`]. No-op when the container is absent.
    pub fn init_iframe(
        &self,
        purchase: &PurchaseInfo,
        callbacks: CheckoutCallbacks,
        config: &CheckoutConfig,
        style: Option<IframeStyle>,
    ) {
        self.relay.register(callbacks.clone());
        let url = build_checkout_url(purchase, config, &self.base_url);
        surface::init_iframe(&url, &style.unwrap_or_default(), &callbacks);
    }

    /// Open the checkout in a modal overlay.
    ///
    /// A still-open previous modal is torn down first; at most one
    /// backdrop/panel pair exists at a time.
    pub fn open_modal(
        &self,
        purchase: &PurchaseInfo,
        callbacks: CheckoutCallbacks,
        config: &CheckoutConfig,
    ) {
        self.close_popup();
        self.relay.register(callbacks.clone());
        let url = build_checkout_url(purchase, config, &self.base_url);
        if let Some(session) = ModalSession::open(&url, &callbacks, Rc::clone(&self.modal)) {
            *self.modal.borrow_mut() = Some(session);
        }
    }

    /// Tear down the modal if one is open. Safe to call at any time; does
    /// not fire `on_close` (that hook belongs to the user-driven close
    /// control).
    pub fn close_popup(&self) {
        // Take first so the slot borrow is released before DOM teardown.
        let session = self.modal.borrow_mut().take();
        if let Some(session) = session {
            session.close();
        }
    }
}

impl Default for CheckoutSdk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let sdk = CheckoutSdk::new();
        assert_eq!(sdk.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let sdk = CheckoutSdk::with_base_url("https://staging.checkout.test/");
        assert_eq!(sdk.base_url(), "https://staging.checkout.test");
    }
}
