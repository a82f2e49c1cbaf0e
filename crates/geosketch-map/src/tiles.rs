use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("tile URL template is missing the {placeholder} placeholder: {template}")]
    MissingPlaceholder {
        placeholder: &'static str,
        template: String,
    },
}

/// A raster tile source, addressed through a slippy-map URL template.
///
/// Templates use `{z}`, `{x}`, `{y}`, and optionally `{s}` for the
/// subdomain. Subdomains are picked by `(x + y) % n` so a given tile always
/// resolves to the same host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSource {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub subdomains: Vec<String>,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl TileSource {
    pub fn new(name: &str, url_template: &str, attribution: &str) -> Result<Self, TileError> {
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !url_template.contains(placeholder) {
                return Err(TileError::MissingPlaceholder {
                    placeholder,
                    template: url_template.to_string(),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            min_zoom: 0,
            max_zoom: 19,
        })
    }

    pub fn with_subdomains(mut self, subdomains: &[&str]) -> Self {
        self.subdomains = subdomains.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Resolve the fetch URL for one tile.
    pub fn tile_url(&self, x: u32, y: u32, zoom: u8) -> String {
        let mut url = self
            .url_template
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string());
        if url.contains("{s}") && !self.subdomains.is_empty() {
            let pick = (x as usize + y as usize) % self.subdomains.len();
            url = url.replace("{s}", &self.subdomains[pick]);
        }
        url
    }
}
