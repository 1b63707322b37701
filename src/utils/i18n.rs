// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma (PT por defecto)
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_uppercase().as_str() {
        "ES" => {
            translations.insert("alternar_basemap", "Alternar mapa base");
            translations.insert("carregar_arquivo", "Cargar GeoJSON");
            translations.insert("arquivo_invalido", "¡Archivo GeoJSON inválido!");
        }
        "EN" => {
            translations.insert("alternar_basemap", "Toggle basemap");
            translations.insert("carregar_arquivo", "Load GeoJSON");
            translations.insert("arquivo_invalido", "Invalid GeoJSON file!");
        }
        _ => {
            translations.insert("alternar_basemap", "Alternar Basemap");
            translations.insert("carregar_arquivo", "Carregar GeoJSON");
            translations.insert("arquivo_invalido", "Arquivo GeoJSON inválido!");
        }
    }

    translations
}

/// Traducir una clave. Devuelve la clave misma si no existe.
pub fn t(key: &'static str, lang: &str) -> &'static str {
    get_translations(lang).get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_is_default() {
        assert_eq!(t("arquivo_invalido", "PT"), "Arquivo GeoJSON inválido!");
        assert_eq!(t("arquivo_invalido", "xx"), "Arquivo GeoJSON inválido!");
        assert_eq!(t("alternar_basemap", "pt"), "Alternar Basemap");
    }

    #[test]
    fn test_other_languages_and_missing_keys() {
        assert_eq!(t("alternar_basemap", "en"), "Toggle basemap");
        assert_eq!(t("carregar_arquivo", "ES"), "Cargar GeoJSON");
        assert_eq!(t("no_existe", "ES"), "no_existe");
    }
}
