//! Browser tests for the modal surface lifecycle.
//!
//! Run with `wasm-pack test --headless --firefox crates/checkout-wasm`.

#![cfg(target_arch = "wasm32")]

use checkout_wasm::{CheckoutCallbacks, CheckoutConfig, CheckoutSdk, PurchaseInfo};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn query(selector: &str) -> Option<web_sys::Element> {
    document().query_selector(selector).unwrap()
}

fn purchase() -> PurchaseInfo {
    PurchaseInfo::new(10.0, "Lunch", "0551234567", "ref-1")
}

fn config() -> CheckoutConfig {
    CheckoutConfig::external("https://example.com/cb", 12345, "abc")
}

#[wasm_bindgen_test]
fn open_modal_inserts_backdrop_and_panel() {
    let sdk = CheckoutSdk::with_base_url("https://checkout.test");

    sdk.open_modal(&purchase(), CheckoutCallbacks::new(), &config());

    assert!(query(".checkout-backdrop").is_some());
    assert!(query(".checkout-modal").is_some());
    assert!(query(".checkout-modal .checkout-frame").is_some());
    assert!(query("#checkout-sdk-styles").is_some());

    sdk.close_popup();
}

#[wasm_bindgen_test]
fn close_control_tears_down_and_fires_on_close_once() {
    let sdk = CheckoutSdk::with_base_url("https://checkout.test");
    let closes = Rc::new(Cell::new(0));

    let callbacks = CheckoutCallbacks::new().on_close({
        let closes = Rc::clone(&closes);
        move || closes.set(closes.get() + 1)
    });
    sdk.open_modal(&purchase(), callbacks, &config());

    let close_icon: HtmlElement = query(".checkout-close-icon")
        .unwrap()
        .dyn_into()
        .unwrap();
    close_icon.click();

    assert!(query(".checkout-backdrop").is_none());
    assert!(query(".checkout-modal").is_none());
    assert_eq!(closes.get(), 1);

    // A second activation has no session left to close.
    close_icon.click();
    assert_eq!(closes.get(), 1);
}

#[wasm_bindgen_test]
fn reopening_checkout_from_on_close_is_safe() {
    let sdk = Rc::new(CheckoutSdk::with_base_url("https://checkout.test"));
    let closes = Rc::new(Cell::new(0));

    let callbacks = CheckoutCallbacks::new().on_close({
        let sdk = Rc::clone(&sdk);
        let closes = Rc::clone(&closes);
        move || {
            closes.set(closes.get() + 1);
            // A host may immediately re-open checkout from its close
            // handler, then tear it down again.
            sdk.open_modal(&purchase(), CheckoutCallbacks::new(), &config());
            sdk.close_popup();
        }
    });
    sdk.open_modal(&purchase(), callbacks, &config());

    let close_icon: HtmlElement = query(".checkout-close-icon")
        .unwrap()
        .dyn_into()
        .unwrap();
    close_icon.click();

    assert_eq!(closes.get(), 1);
    assert!(query(".checkout-modal").is_none());
    assert!(query(".checkout-backdrop").is_none());
}

fn post_message(origin: &str, json: &str) {
    let init = web_sys::MessageEventInit::new();
    init.set_origin(origin);
    init.set_data(&js_sys::JSON::parse(json).unwrap());
    let event = web_sys::MessageEvent::new_with_event_init_dict("message", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn relay_drops_foreign_origin_and_delivers_matching_origin() {
    let sdk = CheckoutSdk::with_base_url("https://checkout.test");
    let successes = Rc::new(Cell::new(0));

    let callbacks = CheckoutCallbacks::new().on_payment_success({
        let successes = Rc::clone(&successes);
        move |payment| {
            assert_eq!(payment.mobile_number, "0551234567");
            assert_eq!(payment.data, "{}");
            successes.set(successes.get() + 1);
        }
    });
    sdk.open_modal(&purchase(), callbacks, &config());

    let payload = r#"{"success":true,"mobileNumber":"0551234567","data":"{}"}"#;

    post_message("https://evil.test", payload);
    assert_eq!(successes.get(), 0);

    post_message("https://checkout.test", payload);
    assert_eq!(successes.get(), 1);

    sdk.close_popup();
}

#[wasm_bindgen_test]
fn close_popup_without_modal_is_a_no_op() {
    let sdk = CheckoutSdk::with_base_url("https://checkout.test");

    let before = document().body().unwrap().child_element_count();
    sdk.close_popup();
    let after = document().body().unwrap().child_element_count();

    assert_eq!(before, after);
}

#[wasm_bindgen_test]
fn reopening_replaces_the_previous_modal() {
    let sdk = CheckoutSdk::with_base_url("https://checkout.test");

    sdk.open_modal(&purchase(), CheckoutCallbacks::new(), &config());
    sdk.open_modal(&purchase(), CheckoutCallbacks::new(), &config());

    assert_eq!(
        document()
            .query_selector_all(".checkout-modal")
            .unwrap()
            .length(),
        1
    );
    assert_eq!(
        document()
            .query_selector_all(".checkout-backdrop")
            .unwrap()
            .length(),
        1
    );

    sdk.close_popup();
    assert!(query(".checkout-modal").is_none());
    assert!(query(".checkout-backdrop").is_none());
}

#[wasm_bindgen_test]
fn init_iframe_without_container_is_a_no_op() {
    let sdk = CheckoutSdk::with_base_url("https://checkout.test");

    // No #checkout-iframe container in this document.
    let before = document().body().unwrap().inner_html();
    sdk.init_iframe(&purchase(), CheckoutCallbacks::new(), &config(), None);

    assert_eq!(document().body().unwrap().inner_html(), before);
}

#[wasm_bindgen_test]
fn init_iframe_mounts_placeholder_then_iframe() {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_id("checkout-iframe");
    document.body().unwrap().append_child(&container).unwrap();

    let sdk = CheckoutSdk::with_base_url("https://checkout.test");
    sdk.init_iframe(&purchase(), CheckoutCallbacks::new(), &config(), None);

    // Before the load event: placeholder visible, iframe hidden.
    assert!(container.query_selector("div").unwrap().is_some());
    let iframe: HtmlElement = container
        .query_selector("iframe")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(iframe.style().get_property_value("display").unwrap(), "none");

    container.remove();
}
