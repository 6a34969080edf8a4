//! # Structural Modal Styles
//!
//! The minimal CSS the modal needs to function: a full-viewport backdrop, a
//! centered panel with a fade-in, a close control, and the loading spinner.
//! Injected into `<head>` once per document, keyed by the style element id.

pub(crate) const STYLE_ELEMENT_ID: &str = "checkout-sdk-styles";

const MODAL_CSS: &str = r#"
.checkout-backdrop {
    position: fixed;
    left: 0;
    top: 0;
    width: 100%;
    height: 100%;
    background-color: rgba(0, 0, 0, 0.5);
    z-index: 2147483646;
}

.checkout-modal {
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    width: 90%;
    height: 90%;
    padding-top: 20px;
    max-width: 480px;
    background-color: #fff;
    border-radius: 10px;
    z-index: 2147483647;
    transition: opacity 0.5s ease, transform 0.5s ease;
    opacity: 0;
}

.checkout-close-icon {
    position: absolute;
    top: 10px;
    width: 25px;
    height: 25px;
    font-size: 20px;
    right: 10px;
    cursor: pointer;
    color: #fff;
    background-color: #000;
    text-align: center;
    border-radius: 50%;
}

.checkout-frame {
    width: 100%;
    height: calc(100% - 20px);
    border: none;
}

.checkout-loader {
    width: 30px;
    height: 30px;
    border: 3px solid #fff;
    border-bottom-color: #42b883;
    border-radius: 50%;
    display: inline-block;
    box-sizing: border-box;
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    z-index: 2147483647;
    animation: checkout-loader-rotation 1s linear infinite;
}

@keyframes checkout-loader-rotation {
    0% {
        transform: rotate(0deg);
    }
    100% {
        transform: rotate(360deg);
    }
}

@media screen and (max-width: 600px) {
    .checkout-modal {
        width: 100%;
        height: 100%;
        border-radius: 0;
        padding-bottom: 0;
        padding-top: 0;
    }
    .checkout-close-icon {
        top: 10px;
        right: 15px;
    }
    .checkout-frame {
        height: 100%;
    }
}
"#;

/// Inject the structural styles if this document does not carry them yet.
pub(crate) fn inject_once() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(MODAL_CSS));
    let _ = head.append_child(&style);
}
