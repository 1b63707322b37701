use std::env;
use std::fs;
use std::path::Path;

// Variables que lee src/config.rs con option_env!
const CONFIG_KEYS: &[&str] = &[
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "MAP_CONTAINER_ID",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_ZOOM",
    "BASEMAP_POSITRON_URL",
    "BASEMAP_DARK_MATTER_URL",
    "DEFAULT_LANGUAGE",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/municipios.geojson");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env, usando valores por defecto");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
