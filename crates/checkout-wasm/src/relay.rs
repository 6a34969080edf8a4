//! # Message Relay
//!
//! Subscribes to the window `message` stream, validates the sender origin,
//! classifies each payload through `checkout-core`, and delivers the result
//! to the registered callback set.
//!
//! One relay owns at most one listener. Re-registering swaps the callback
//! set rather than stacking another listener, so the callbacks supplied to
//! the latest `open_modal`/`init_iframe` call win. The listener itself is
//! never detached; it lives for the page lifetime.

use crate::callbacks::CheckoutCallbacks;
use checkout_core::CheckoutEvent;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

pub(crate) struct MessageRelay {
    /// Required sender origin, compared with strict equality
    origin: String,
    callbacks: Rc<RefCell<CheckoutCallbacks>>,
    attached: Cell<bool>,
}

/// Handle one inbound message: drop it unless the sender origin matches
/// exactly, otherwise classify and dispatch. The payload is produced
/// lazily; a foreign-origin message is never even decoded.
fn relay_message(
    expected_origin: &str,
    sender_origin: &str,
    payload: impl FnOnce() -> Option<Value>,
    callbacks: &CheckoutCallbacks,
) {
    if sender_origin != expected_origin {
        debug!(sender_origin, "dropped checkout message from foreign origin");
        return;
    }
    let Some(payload) = payload() else {
        return;
    };
    callbacks.dispatch(CheckoutEvent::classify(payload));
}

impl MessageRelay {
    pub(crate) fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            callbacks: Rc::new(RefCell::new(CheckoutCallbacks::new())),
            attached: Cell::new(false),
        }
    }

    /// Register the callback set for the current embedding session,
    /// attaching the window listener on first use.
    pub(crate) fn register(&self, callbacks: CheckoutCallbacks) {
        *self.callbacks.borrow_mut() = callbacks;

        if self.attached.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let origin = self.origin.clone();
        let callbacks = Rc::clone(&self.callbacks);
        let handler = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            // Clone the set out before dispatch so a handler that opens a
            // new surface (and re-registers) does not hit a live borrow.
            let current = callbacks.borrow().clone();
            relay_message(
                &origin,
                &event.origin(),
                || serde_wasm_bindgen::from_value(event.data()).ok(),
                &current,
            );
        });

        if window
            .add_event_listener_with_callback("message", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            self.attached.set(true);
        }
        handler.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success_payload() -> Value {
        json!({
            "success": true,
            "mobileNumber": "0551234567",
            "data": "{}"
        })
    }

    #[test]
    fn test_foreign_origin_never_classified() {
        let successes = Rc::new(Cell::new(0));
        let callbacks = CheckoutCallbacks::new().on_payment_success({
            let successes = Rc::clone(&successes);
            move |_| successes.set(successes.get() + 1)
        });

        let decoded = Rc::new(Cell::new(false));
        relay_message(
            "https://checkout.test",
            "https://evil.test",
            {
                let decoded = Rc::clone(&decoded);
                move || {
                    decoded.set(true);
                    Some(success_payload())
                }
            },
            &callbacks,
        );

        assert_eq!(successes.get(), 0);
        // Foreign-origin payloads are not even decoded.
        assert!(!decoded.get());
    }

    #[test]
    fn test_origin_match_is_exact() {
        let successes = Rc::new(Cell::new(0));
        let callbacks = CheckoutCallbacks::new().on_payment_success({
            let successes = Rc::clone(&successes);
            move |_| successes.set(successes.get() + 1)
        });

        // No wildcard, no subdomain, no scheme or trailing-slash leniency.
        for sender in [
            "https://sub.checkout.test",
            "http://checkout.test",
            "https://checkout.test/",
            "https://checkout.test.evil.test",
        ] {
            relay_message(
                "https://checkout.test",
                sender,
                || Some(success_payload()),
                &callbacks,
            );
        }
        assert_eq!(successes.get(), 0);

        relay_message(
            "https://checkout.test",
            "https://checkout.test",
            || Some(success_payload()),
            &callbacks,
        );
        assert_eq!(successes.get(), 1);
    }

    #[test]
    fn test_undecodable_payload_dropped() {
        let successes = Rc::new(Cell::new(0));
        let callbacks = CheckoutCallbacks::new().on_payment_success({
            let successes = Rc::clone(&successes);
            move |_| successes.set(successes.get() + 1)
        });

        relay_message(
            "https://checkout.test",
            "https://checkout.test",
            || None,
            &callbacks,
        );

        assert_eq!(successes.get(), 0);
    }
}
