//! dom_utils.rs – thin helper layer for repetitive DOM operations.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Make the element visible by dropping the `hidden` class.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
}

/// Hide the element by adding the `hidden` class.
pub fn hide(el: &Element) {
    let _ = el.class_list().add_1("hidden");
}

/// Look up an element by id, failing with a descriptive `JsValue` when the
/// page skeleton is incomplete.
pub fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

/// Look up an element by id and cast it to a concrete web-sys type.
pub fn require_typed<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    require_element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has unexpected type", id)))
}
