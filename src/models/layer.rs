// ============================================================================
// LAYER DESCRIPTORS - Descripción serializable de las capas de deck.gl
// ============================================================================
// Rust describe las capas, deck_bridge.js las instancia (IconLayer,
// GeoJsonLayer, LineLayer). Se recalculan en cada render, nunca se guardan.
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use crate::config::MapConfig;

pub type Rgb = [u8; 3];
pub type Rgba = [u8; 4];

/// Vista inicial del mapa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub controller: bool,
}

impl ViewState {
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            longitude: config.default_center_lng,
            latitude: config.default_center_lat,
            zoom: config.default_zoom,
            controller: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub anchor_y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconDatum {
    pub id: u32,
    pub position: [f64; 2],
    pub icon: IconSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDatum {
    pub source: [f64; 2],
    pub target: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum LayerSpec<'a> {
    #[serde(rename = "icon", rename_all = "camelCase")]
    Icon {
        id: &'static str,
        data: Vec<IconDatum>,
        pickable: bool,
        size: f64,
        size_scale: f64,
    },
    #[serde(rename = "geojson", rename_all = "camelCase")]
    GeoJson {
        id: &'static str,
        data: &'a Value,
        filled: bool,
        stroked: bool,
        fill_color: Rgba,
        line_color: Rgb,
        #[serde(skip_serializing_if = "Option::is_none")]
        line_width_min_pixels: Option<f64>,
    },
    #[serde(rename = "line", rename_all = "camelCase")]
    Line {
        id: &'static str,
        data: Vec<LineDatum>,
        color: Rgb,
        width: f64,
    },
}

impl LayerSpec<'_> {
    pub fn id(&self) -> &'static str {
        match self {
            LayerSpec::Icon { id, .. } | LayerSpec::GeoJson { id, .. } | LayerSpec::Line { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geojson_layer_wire_format() {
        let data = json!({"type": "FeatureCollection", "features": []});
        let layer = LayerSpec::GeoJson {
            id: "uploaded-data",
            data: &data,
            filled: true,
            stroked: true,
            fill_color: [0, 140, 255, 100],
            line_color: [0, 0, 255],
            line_width_min_pixels: None,
        };

        let wire = serde_json::to_value(&layer).unwrap();
        assert_eq!(wire["kind"], "geojson");
        assert_eq!(wire["id"], "uploaded-data");
        assert_eq!(wire["fillColor"], json!([0, 140, 255, 100]));
        assert_eq!(wire["data"]["type"], "FeatureCollection");
        assert!(wire.get("lineWidthMinPixels").is_none());
    }

    #[test]
    fn test_icon_layer_uses_camel_case() {
        let layer = LayerSpec::Icon {
            id: "pontos-interesse",
            data: vec![IconDatum {
                id: 0,
                position: [-46.0, -23.0],
                icon: IconSpec { url: "https://x/y.png".into(), width: 128, height: 128, anchor_y: 128 },
            }],
            pickable: true,
            size: 6.0,
            size_scale: 15.0,
        };

        let wire = serde_json::to_value(&layer).unwrap();
        assert_eq!(wire["kind"], "icon");
        assert_eq!(wire["sizeScale"], 15.0);
        assert_eq!(wire["data"][0]["icon"]["anchorY"], 128);
    }
}
