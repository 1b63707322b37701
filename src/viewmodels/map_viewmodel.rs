// ============================================================================
// MAP VIEWMODEL - Derivación de capas y envío al mapa
// ============================================================================
// build_layers es una función pura del estado; el resto solo serializa
// y delega en deck_bridge.js.
// ============================================================================

use serde_json::Value;
use crate::config::CONFIG;
use crate::models::{
    Basemap, IconDatum, IconSpec, LayerSpec, LineDatum, PointOfInterest, ViewState,
    points_of_interest,
};
use crate::services::municipios;
use crate::state::AppState;
use crate::utils::deck_ffi::*;

pub const POINTS_LAYER_ID: &str = "pontos-interesse";
pub const BOUNDARIES_LAYER_ID: &str = "municipios";
pub const CONNECTORS_LAYER_ID: &str = "linhas";
pub const UPLOADED_LAYER_ID: &str = "uploaded-data";

const ICON_PX: u32 = 128;

/// Orden fijo: iconos, municipios, líneas (si hay más de un punto), dataset cargado (si existe)
pub fn build_layers<'a>(
    points: &[PointOfInterest],
    boundaries: &'a Value,
    uploaded: Option<&'a Value>,
) -> Vec<LayerSpec<'a>> {
    let mut layers: Vec<LayerSpec<'a>> = vec![
        points_layer(points),
        LayerSpec::GeoJson {
            id: BOUNDARIES_LAYER_ID,
            data: boundaries,
            filled: true,
            stroked: true,
            fill_color: [200, 200, 200, 100],
            line_color: [0, 0, 0],
            line_width_min_pixels: Some(2.0),
        },
    ];

    if let Some(connectors) = connectors_layer(points) {
        layers.push(connectors);
    }

    if let Some(data) = uploaded {
        layers.push(LayerSpec::GeoJson {
            id: UPLOADED_LAYER_ID,
            data,
            filled: true,
            stroked: true,
            fill_color: [0, 140, 255, 100],
            line_color: [0, 0, 255],
            line_width_min_pixels: None,
        });
    }

    layers
}

fn points_layer(points: &[PointOfInterest]) -> LayerSpec<'static> {
    let data = points
        .iter()
        .map(|point| IconDatum {
            id: point.id,
            position: point.coordinates.position(),
            icon: IconSpec {
                url: point.icon_url.to_string(),
                width: ICON_PX,
                height: ICON_PX,
                anchor_y: ICON_PX,
            },
        })
        .collect();

    LayerSpec::Icon {
        id: POINTS_LAYER_ID,
        data,
        pickable: true,
        size: 6.0,
        size_scale: 15.0,
    }
}

/// Una línea por cada punto después del primero, todas hacia el primero
fn connectors_layer(points: &[PointOfInterest]) -> Option<LayerSpec<'static>> {
    let (reference, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let target = reference.coordinates.position();
    let data = rest
        .iter()
        .map(|point| LineDatum {
            source: point.coordinates.position(),
            target,
        })
        .collect();

    Some(LayerSpec::Line {
        id: CONNECTORS_LAYER_ID,
        data,
        color: [255, 0, 0],
        width: 2.0,
    })
}

/// ViewModel del mapa - SOLO preparación de datos y envío al bridge
pub struct MapViewModel;

impl MapViewModel {
    /// Crear el mapa en el contenedor con el basemap actual
    pub fn initialize_map(state: &AppState) {
        let view_state = ViewState::from_config(&CONFIG.map_config);
        let basemap = state.get_basemap();

        match serde_json::to_string(&view_state) {
            Ok(json) => {
                log::info!("🗺️ [MAP] Inicializando mapa ({:?}, zoom {})", basemap, view_state.zoom);
                init_deck_map(&CONFIG.map_config.container_id, &json, basemap.style_url());
            }
            Err(e) => log::error!("❌ [MAP] Error serializando view state: {}", e),
        }
    }

    /// Recalcular capas a partir del estado y enviarlas al mapa
    pub fn render_layers(state: &AppState) {
        let points = points_of_interest();
        log::info!("📍 [MAP] Puntos de interés: {:?}", points);

        let uploaded = state.uploaded_data.borrow();
        let layers = build_layers(points, municipios(), uploaded.as_ref());
        let ids: Vec<&str> = layers.iter().map(LayerSpec::id).collect();

        match serde_json::to_string(&layers) {
            Ok(json) => {
                log::info!("📤 [MAP] {} capas {:?} ({} bytes)", layers.len(), ids, json.len());
                set_deck_layers(&json);
            }
            Err(e) => log::error!("❌ [MAP] Error serializando capas: {}", e),
        }
    }

    pub fn apply_basemap(basemap: Basemap) {
        log::info!("🎨 [MAP] Estilo -> {}", basemap.style_url());
        set_basemap_style(basemap.style_url());
    }
}
