// ============================================================================
// DATASET SERVICE - Contornos municipales embebidos en el binario
// ============================================================================

use serde_json::{json, Value};

const MUNICIPIOS_GEOJSON: &str = include_str!("../../data/municipios.geojson");

lazy_static::lazy_static! {
    static ref MUNICIPIOS: Value = load_bundled_dataset("municipios", MUNICIPIOS_GEOJSON);
}

/// Contornos municipales (se parsean una sola vez por sesión)
pub fn municipios() -> &'static Value {
    &MUNICIPIOS
}

/// FeatureCollection vacía, usada cuando el dataset embebido no se puede leer
pub fn empty_feature_collection() -> Value {
    json!({ "type": "FeatureCollection", "features": [] })
}

/// Número de features si el valor tiene forma de FeatureCollection
pub fn feature_count(data: &Value) -> Option<usize> {
    data.get("features").and_then(Value::as_array).map(Vec::len)
}

fn load_bundled_dataset(name: &str, raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(data) => {
            log::info!(
                "🗂️ [DATASET] {} cargado ({} features)",
                name,
                feature_count(&data).unwrap_or(0)
            );
            data
        }
        Err(e) => {
            log::error!("❌ [DATASET] {} embebido inválido: {}", name, e);
            empty_feature_collection()
        }
    }
}
