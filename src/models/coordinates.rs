use serde::{Deserialize, Serialize};

/// Coordenadas geográficas (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Posición en el orden que espera deck.gl: [lng, lat]
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}
