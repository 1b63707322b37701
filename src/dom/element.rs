// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Mostrar alerta bloqueante (window.alert)
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("❌ [DOM] No se pudo mostrar alerta: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [DOM] Sin window, alerta omitida: {}", message),
    }
}
