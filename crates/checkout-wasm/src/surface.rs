//! # Embedding Surfaces
//!
//! DOM lifecycle for the two embedded delivery modes: the inline iframe
//! mounted into a host-designated container, and the modal backdrop/panel
//! pair appended to the document body.
//!
//! Every entry point degrades to a silent no-op when the DOM it needs is
//! absent; nothing here is fatal to the host page.

use crate::callbacks::CheckoutCallbacks;
use crate::styles;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlIFrameElement};

/// Id of the host container element the inline iframe mounts into.
///
/// The element must exist in the host document before `init_iframe` is
/// called; its absence is a silent no-op.
pub const IFRAME_CONTAINER_ID: &str = "checkout-iframe";

/// Style overrides for the inline iframe
#[derive(Debug, Clone)]
pub struct IframeStyle {
    pub width: String,
    pub height: String,
    pub border: String,
}

impl Default for IframeStyle {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            border: "none".to_string(),
        }
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn create_iframe(document: &Document, url: &str) -> Option<HtmlIFrameElement> {
    let iframe: HtmlIFrameElement = document.create_element("iframe").ok()?.dyn_into().ok()?;
    iframe.set_src(url);
    Some(iframe)
}

/// Mount the checkout into the host's inline container.
///
/// Clears the container, shows a loading placeholder, and swaps it for the
/// iframe once the checkout page has loaded. The iframe's lifetime is owned
/// by the container; there is no close affordance in this mode.
pub(crate) fn init_iframe(url: &str, style: &IframeStyle, callbacks: &CheckoutCallbacks) {
    let Some(document) = document() else {
        return;
    };
    let Some(container) = document.get_element_by_id(IFRAME_CONTAINER_ID) else {
        return;
    };
    container.set_inner_html("");

    let Ok(placeholder) = document.create_element("div") else {
        return;
    };
    placeholder.set_text_content(Some("Loading..."));
    let _ = container.append_child(&placeholder);

    let Some(iframe) = create_iframe(&document, url) else {
        return;
    };
    let css = iframe.style();
    let _ = css.set_property("display", "none");
    let _ = css.set_property("width", &style.width);
    let _ = css.set_property("height", &style.height);
    let _ = css.set_property("border", &style.border);

    let onload = {
        let container = container.clone();
        let placeholder = placeholder.clone();
        let iframe = iframe.clone();
        let callbacks = callbacks.clone();
        Closure::<dyn FnMut()>::new(move || {
            let _ = container.remove_child(&placeholder);
            let _ = iframe.style().set_property("display", "block");
            callbacks.fire_load();
        })
    };
    iframe.set_onload(Some(onload.as_ref().unchecked_ref()));
    // Load fires at most once; the closure outlives the surface.
    onload.forget();

    let _ = container.append_child(&iframe);
}

/// An open modal: the backdrop/panel pair, held by reference.
///
/// The facade owns at most one session at a time; closing consumes it and
/// removes both nodes, leaving no residue in the document. A session closed
/// before the iframe finishes loading never fires `on_load`, since the
/// pending load callback's target is gone.
pub(crate) struct ModalSession {
    backdrop: Element,
    modal: Element,
}

impl ModalSession {
    /// Build the backdrop, spinner, panel, close control and iframe, and
    /// append them to the document body. `slot` is the facade's session
    /// holder; the close control empties it. Nothing touches the document
    /// until every node has been created, so a mid-sequence failure leaves
    /// no residue behind.
    pub(crate) fn open(
        url: &str,
        callbacks: &CheckoutCallbacks,
        slot: Rc<RefCell<Option<ModalSession>>>,
    ) -> Option<Self> {
        styles::inject_once();

        let document = document()?;
        let body = document.body()?;

        let backdrop = document.create_element("div").ok()?;
        backdrop.set_class_name("checkout-backdrop");
        let loader = document.create_element("span").ok()?;
        loader.set_class_name("checkout-loader");
        backdrop.append_child(&loader).ok()?;

        let modal: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        modal.set_class_name("checkout-modal");

        let close_icon = document.create_element("div").ok()?;
        close_icon.set_class_name("checkout-close-icon");
        close_icon.set_inner_html("&times;");
        let onclick = {
            let slot = Rc::clone(&slot);
            let callbacks = callbacks.clone();
            Closure::<dyn FnMut()>::new(move || {
                // Release the slot borrow before running host code: a close
                // handler may legitimately reopen or re-close the checkout.
                let session = slot.borrow_mut().take();
                if let Some(session) = session {
                    session.close();
                    callbacks.fire_close();
                }
            })
        };
        close_icon
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .ok()?;
        onclick.forget();
        modal.append_child(&close_icon).ok()?;

        let iframe = create_iframe(&document, url)?;
        iframe.set_class_name("checkout-frame");
        let onload = {
            let modal = modal.clone();
            let callbacks = callbacks.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = modal.style().set_property("opacity", "1");
                callbacks.fire_load();
            })
        };
        iframe.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        modal.append_child(&iframe).ok()?;

        let _ = modal.style().set_property("opacity", "0");

        body.append_child(&backdrop).ok()?;
        if body.append_child(&modal).is_err() {
            backdrop.remove();
            return None;
        }

        Some(Self {
            backdrop,
            modal: modal.into(),
        })
    }

    /// Remove the backdrop and panel from the document.
    pub(crate) fn close(self) {
        self.backdrop.remove();
        self.modal.remove();
    }
}
