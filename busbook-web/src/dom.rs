use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Set `lang` on the root `<html>` element. Failures are reported to the console.
pub fn set_document_lang(lang: &str) {
    let Some(root) = window().document().and_then(|doc| doc.document_element()) else {
        console_error("document has no root element");
        return;
    };
    if let Err(err) = root.set_attribute("lang", lang) {
        console_error(&js_error_message(&err));
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Show a blocking alert. Failures are reported to the console.
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        console_error(&js_error_message(&err));
    }
}

/// Load `url` as a new page, the same as following a link.
pub fn navigate(url: &str) {
    log::debug!("navigating to {url}");
    if let Err(err) = window().location().set_href(url) {
        console_error(&format!("navigation to {url} failed: {}", js_error_message(&err)));
    }
}

/// Current value of the `<input>` or `<select>` that fired `event`.
#[must_use]
pub fn event_value(event: &web_sys::Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .map(web_sys::HtmlSelectElement::value)
}
