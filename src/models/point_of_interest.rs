// ============================================================================
// PUNTOS DE INTERÉS - Datos fijos embebidos
// ============================================================================
// El primer punto es la referencia: todas las líneas conectoras terminan en él.
// ============================================================================

use serde::Serialize;
use super::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub id: u32,
    pub coordinates: Coordinates,
    pub icon_url: &'static str,
}

const POINTS: [PointOfInterest; 3] = [
    PointOfInterest {
        id: 0,
        coordinates: Coordinates::new(-46.39179622837122, -23.9478225466285),
        icon_url: "https://cdn-icons-png.flaticon.com/128/164/164403.png",
    },
    PointOfInterest {
        id: 1,
        coordinates: Coordinates::new(-46.57020592055778, -23.690434117386857),
        icon_url: "https://cdn-icons-png.flaticon.com/128/164/164363.png",
    },
    PointOfInterest {
        id: 2,
        coordinates: Coordinates::new(-46.539400162248654, -23.594485788093706),
        icon_url: "https://cdn-icons-png.flaticon.com/128/233/233992.png",
    },
];

/// Puntos de interés de la sesión (inmutables)
pub fn points_of_interest() -> &'static [PointOfInterest] {
    &POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point_is_first() {
        let points = points_of_interest();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].id, 0);
        assert!((points[0].coordinates.longitude - -46.3918).abs() < 1e-4);
        assert!((points[0].coordinates.latitude - -23.9478).abs() < 1e-4);
    }

    #[test]
    fn test_icons_are_remote_png() {
        for point in points_of_interest() {
            assert!(point.icon_url.starts_with("https://"));
            assert!(point.icon_url.ends_with(".png"));
        }
    }
}
