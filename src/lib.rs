// ============================================================================
// MUNICIPIOS MAP - FRONTEND MVVM (RUST PURO + deck.gl)
// ============================================================================
// - Views: Funciones que construyen DOM (sin lógica)
// - ViewModels: Derivación de capas y envío al mapa
// - Services: Dataset embebido + lectura/parseo de archivos
// - State: Rc<RefCell> + subscribers
// - Models: Puntos, basemap, descriptores de capas
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Municipios Map - Rust + deck.gl");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Aplicar un cambio de estado sobre la app montada
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let mut app_ref = app_cell.borrow_mut();
        let Some(app) = app_ref.as_mut() else {
            log::warn!("⚠️ [UPDATE] App no está inicializada");
            return;
        };

        match update_type {
            UpdateType::Incremental(inc_type) => {
                log::debug!("🔄 [UPDATE] Incremental: {:?}", inc_type);
                app.update_incremental(inc_type);
            }
            UpdateType::FullRender => {
                if let Err(e) = app.render() {
                    log::error!("❌ [UPDATE] Error re-renderizando: {:?}", e);
                }
            }
        }
    });
}

/// Re-render completo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Basemap actual, para depurar desde la consola del navegador
#[wasm_bindgen]
pub fn current_basemap_url() -> Option<String> {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .map(|app| app.state().get_basemap().style_url().to_string())
    })
}
