//! # Host Callbacks
//!
//! The typed, all-optional handler set a host supplies when embedding the
//! checkout. One handler per classified event variant, plus the `load` and
//! `close` lifecycle hooks of the embedded surface. A missing handler is
//! never a fault; the event is simply not delivered.

use checkout_core::{CheckoutEvent, Initiate, PaymentFailure, PaymentSuccess};
use serde_json::Value;
use std::rc::Rc;

type Handler<T> = Rc<dyn Fn(T)>;
type Hook = Rc<dyn Fn()>;

/// Host-supplied callbacks for one embedding session.
///
/// Built in the builder style; handlers are reference-counted so the set
/// can be shared between the message relay and the DOM surface closures.
///
/// ```rust,ignore
/// let callbacks = CheckoutCallbacks::new()
///     .on_payment_success(|payment| { /* fulfil the order */ })
///     .on_payment_failure(|failure| { /* surface failure.message */ })
///     .on_load(|| { /* hide the host spinner */ });
/// ```
#[derive(Clone, Default)]
pub struct CheckoutCallbacks {
    pub(crate) on_init: Option<Handler<Initiate>>,
    /// Legacy name for `on_init`; both fire for an `Initiated` event
    pub(crate) init: Option<Handler<Initiate>>,
    pub(crate) on_payment_success: Option<Handler<PaymentSuccess>>,
    pub(crate) on_payment_failure: Option<Handler<PaymentFailure>>,
    pub(crate) on_fees_changed: Option<Handler<Value>>,
    pub(crate) on_resize: Option<Handler<Value>>,
    pub(crate) on_load: Option<Hook>,
    pub(crate) on_close: Option<Hook>,
}

impl CheckoutCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the checkout page has initialized
    pub fn on_init(mut self, f: impl Fn(Initiate) + 'static) -> Self {
        self.on_init = Some(Rc::new(f));
        self
    }

    /// Legacy registration for the initialize event; kept for hosts written
    /// against the original callback name. Fires alongside `on_init`.
    pub fn init(mut self, f: impl Fn(Initiate) + 'static) -> Self {
        self.init = Some(Rc::new(f));
        self
    }

    /// Called when the payment succeeds
    pub fn on_payment_success(mut self, f: impl Fn(PaymentSuccess) + 'static) -> Self {
        self.on_payment_success = Some(Rc::new(f));
        self
    }

    /// Called when the payment fails
    pub fn on_payment_failure(mut self, f: impl Fn(PaymentFailure) + 'static) -> Self {
        self.on_payment_failure = Some(Rc::new(f));
        self
    }

    /// Called with the new fees when the checkout reports a fee change
    pub fn on_fees_changed(mut self, f: impl Fn(Value) + 'static) -> Self {
        self.on_fees_changed = Some(Rc::new(f));
        self
    }

    /// Called with the full payload when the embedded page requests a resize
    pub fn on_resize(mut self, f: impl Fn(Value) + 'static) -> Self {
        self.on_resize = Some(Rc::new(f));
        self
    }

    /// Called once the embedded iframe finishes loading
    pub fn on_load(mut self, f: impl Fn() + 'static) -> Self {
        self.on_load = Some(Rc::new(f));
        self
    }

    /// Called when the modal close control is activated
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(f));
        self
    }

    /// Deliver a classified event to the matching handler(s).
    pub(crate) fn dispatch(&self, event: CheckoutEvent) {
        match event {
            CheckoutEvent::PaymentSucceeded(payment) => {
                if let Some(f) = &self.on_payment_success {
                    f(payment);
                }
            }
            CheckoutEvent::PaymentFailed(failure) => {
                if let Some(f) = &self.on_payment_failure {
                    f(failure);
                }
            }
            CheckoutEvent::Initiated(initiate) => {
                // Legacy and current names both fire, in that order.
                if let Some(f) = &self.init {
                    f(initiate.clone());
                }
                if let Some(f) = &self.on_init {
                    f(initiate);
                }
            }
            CheckoutEvent::FeesChanged(fees) => {
                if let Some(f) = &self.on_fees_changed {
                    f(fees);
                }
            }
            CheckoutEvent::Resized(payload) => {
                if let Some(f) = &self.on_resize {
                    f(payload);
                }
            }
            // Already logged by the classifier; dropped here.
            CheckoutEvent::Unclassified(_) => {}
        }
    }

    pub(crate) fn fire_load(&self) {
        if let Some(f) = &self.on_load {
            f();
        }
    }

    pub(crate) fn fire_close(&self) {
        if let Some(f) = &self.on_close {
            f();
        }
    }
}
