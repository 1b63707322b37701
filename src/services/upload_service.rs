// ============================================================================
// UPLOAD SERVICE - Lectura y parseo de archivos GeoJSON del usuario
// ============================================================================
// Solo se valida que el contenido sea JSON. La geometría no se revisa:
// si es inválida, deck.gl simplemente no la dibuja.
// ============================================================================

use serde_json::Value;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Error de carga de archivo
#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    InvalidJson(String),
    ReadFailed(String),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
            UploadError::ReadFailed(msg) => write!(f, "File read failed: {}", msg),
        }
    }
}

impl std::error::Error for UploadError {}

/// Parsear el texto completo del archivo
pub fn parse_upload(text: &str) -> Result<Value, UploadError> {
    serde_json::from_str(text).map_err(|e| UploadError::InvalidJson(e.to_string()))
}

/// Leer el archivo completo como texto (Blob.text())
pub async fn read_file_as_text(file: &File) -> Result<String, UploadError> {
    log::info!("📂 [UPLOAD] Leyendo {} ({} bytes)", file.name(), file.size());

    let result = JsFuture::from(file.text())
        .await
        .map_err(|e| UploadError::ReadFailed(format!("{:?}", e)))?;

    result
        .as_string()
        .ok_or_else(|| UploadError::ReadFailed("result is not text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_feature_collection() {
        let data = parse_upload(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert_eq!(data["type"], "FeatureCollection");
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        let err = parse_upload("not json").unwrap_err();
        assert!(matches!(err, UploadError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_parse_accepts_any_valid_json() {
        // Sin validación de esquema: cualquier JSON válido pasa
        assert!(parse_upload(r#"{"type":"Point"}"#).is_ok());
        assert!(parse_upload("[]").is_ok());
        assert!(parse_upload("").is_err());
    }
}
