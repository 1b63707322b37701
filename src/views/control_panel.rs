// ============================================================================
// CONTROL PANEL VIEW - Botón de basemap + selector de archivo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};
use crate::config::CONFIG;
use crate::dom::{alert, on_change, on_click, ElementBuilder};
use crate::services::{read_file_as_text, UploadError};
use crate::state::{AppState, UploadOutcome};
use crate::utils::t;

/// Solo una pista para el selector, no se valida la extensión
const ACCEPTED_EXTENSIONS: &str = ".geojson,.json";

pub fn render_control_panel(state: &AppState) -> Result<Element, JsValue> {
    let lang = CONFIG.language.as_str();

    let toggle_btn = ElementBuilder::new("button")?
        .class("btn-basemap")
        .attr("type", "button")?
        .text(t("alternar_basemap", lang))
        .build();
    {
        let state = state.clone();
        on_click(&toggle_btn, move |_e| {
            state.toggle_basemap();
        })?;
    }

    let file_input = ElementBuilder::new("input")?
        .class("file-input")
        .attr("type", "file")?
        .attr("accept", ACCEPTED_EXTENSIONS)?
        .attr("title", t("carregar_arquivo", lang))?
        .build();
    {
        let state = state.clone();
        on_change(&file_input, move |e: Event| handle_file_selected(&state, e))?;
    }

    ElementBuilder::new("div")?
        .class("control-panel")
        .child(toggle_btn)?
        .child(file_input)
        .map(ElementBuilder::build)
}

fn handle_file_selected(state: &AppState, event: Event) {
    let Some(input) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("⚠️ [UPLOAD] Evento change sin input");
        return;
    };

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        // Selección cancelada
        return;
    };

    let ticket = state.begin_upload();
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let read_result = read_file_as_text(&file).await;
        match state.complete_upload(ticket, read_result) {
            Ok(UploadOutcome::Applied) => {
                log::info!("✅ [UPLOAD] {} aplicado", file.name());
            }
            Ok(UploadOutcome::Superseded) => {
                log::info!("⏭️ [UPLOAD] {} ignorado, hay una selección más reciente", file.name());
            }
            Err(e) => report_upload_error(&file.name(), &e),
        }
    });
}

fn report_upload_error(file_name: &str, error: &UploadError) {
    log::error!("❌ [UPLOAD] {}: {}", file_name, error);
    alert(t("arquivo_invalido", &CONFIG.language));
}
