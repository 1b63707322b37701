// ============================================================================
// DECK.GL FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para las funciones de public/deck_bridge.js - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initDeckMap)]
    pub fn init_deck_map(container_id: &str, view_state_json: &str, style_url: &str);

    #[wasm_bindgen(js_name = setDeckLayers)]
    pub fn set_deck_layers(layers_json: &str);

    #[wasm_bindgen(js_name = setBasemapStyle)]
    pub fn set_basemap_style(style_url: &str);
}
