// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, IncrementalUpdate};
use crate::viewmodels::MapViewModel;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Los cambios se aplican en el siguiente turno del event loop,
        // fuera del borrow del handler que los provocó
        state.subscribe_to_changes(move |update_type| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Render completo: DOM + mapa + capas
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Render completo");

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;

        MapViewModel::initialize_map(&self.state);
        MapViewModel::render_layers(&self.state);
        Ok(())
    }

    /// Actualización sin reconstruir el mapa
    pub fn update_incremental(&self, update_type: IncrementalUpdate) {
        match update_type {
            IncrementalUpdate::Basemap => MapViewModel::apply_basemap(self.state.get_basemap()),
            IncrementalUpdate::Layers => MapViewModel::render_layers(&self.state),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
