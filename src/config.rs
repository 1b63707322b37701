use serde::{Deserialize, Serialize};

const POSITRON_STYLE_URL: &str = "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json";
const DARK_MATTER_STYLE_URL: &str = "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub language: String,
    pub map_config: MapConfig,
    pub basemap_config: BasemapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            language: "PT".to_string(),
            map_config: MapConfig::default(),
            basemap_config: BasemapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub container_id: String,
    pub default_center_lng: f64,
    pub default_center_lat: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            default_center_lng: -46.5,
            default_center_lat: -23.6,
            default_zoom: 9.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasemapConfig {
    pub positron_url: String,
    pub dark_matter_url: String,
}

impl Default for BasemapConfig {
    fn default() -> Self {
        Self {
            positron_url: POSITRON_STYLE_URL.to_string(),
            dark_matter_url: DARK_MATTER_STYLE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            language: option_env!("DEFAULT_LANGUAGE")
                .map(str::to_uppercase)
                .unwrap_or(defaults.language),
            map_config: MapConfig {
                container_id: option_env!("MAP_CONTAINER_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.container_id),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_zoom: parse_or(
                    option_env!("DEFAULT_MAP_ZOOM"),
                    defaults.map_config.default_zoom,
                ),
            },
            basemap_config: BasemapConfig {
                positron_url: option_env!("BASEMAP_POSITRON_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.basemap_config.positron_url),
                dark_matter_url: option_env!("BASEMAP_DARK_MATTER_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.basemap_config.dark_matter_url),
            },
        }
    }

    /// Nivel efectivo para wasm_logger. Con logging deshabilitado solo se ven warnings y errores.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_view() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.default_center_lng, -46.5);
        assert_eq!(config.map_config.default_center_lat, -23.6);
        assert_eq!(config.map_config.default_zoom, 9.0);
        assert_eq!(config.map_config.container_id, "map");
        assert!(config.basemap_config.positron_url.contains("positron-gl-style"));
        assert!(config.basemap_config.dark_matter_url.contains("dark-matter-gl-style"));
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("12.5"), 9.0), 12.5);
        assert_eq!(parse_or(Some("doce"), 9.0), 9.0);
        assert_eq!(parse_or::<bool>(None, true), true);
    }

    #[test]
    fn test_log_level_respects_enable_flag() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
