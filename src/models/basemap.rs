use serde::{Deserialize, Serialize};
use crate::config::CONFIG;

/// Estilo del mapa base. Solo existen dos valores y se alternan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Basemap {
    #[default]
    Positron,
    DarkMatter,
}

impl Basemap {
    pub fn toggled(self) -> Self {
        match self {
            Basemap::Positron => Basemap::DarkMatter,
            Basemap::DarkMatter => Basemap::Positron,
        }
    }

    /// URL del documento de estilo MapLibre
    pub fn style_url(self) -> &'static str {
        match self {
            Basemap::Positron => CONFIG.basemap_config.positron_url.as_str(),
            Basemap::DarkMatter => CONFIG.basemap_config.dark_matter_url.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for basemap in [Basemap::Positron, Basemap::DarkMatter] {
            assert_eq!(basemap.toggled().toggled(), basemap);
            assert_ne!(basemap.toggled(), basemap);
        }
    }

    #[test]
    fn test_style_urls_are_distinct() {
        assert_eq!(Basemap::default(), Basemap::Positron);
        assert_ne!(Basemap::Positron.style_url(), Basemap::DarkMatter.style_url());
    }
}
