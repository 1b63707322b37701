// ============================================================================
// APP VIEW - Lienzo del mapa a pantalla completa + panel flotante
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::views::render_control_panel;

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    // El contenedor debe existir en el DOM antes de initDeckMap
    let map_container = ElementBuilder::new("div")?
        .id(&CONFIG.map_config.container_id)?
        .class("map-canvas")
        .build();

    ElementBuilder::new("div")?
        .class("map-view")
        .child(map_container)?
        .child(render_control_panel(state)?)
        .map(ElementBuilder::build)
}
