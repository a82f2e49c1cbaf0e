use serde::{Deserialize, Serialize};
use thiserror::Error;

use geosketch_capture::{CapturePolicy, PointerReadout, ShapeCapture, TextPanel};
use geosketch_core::LatLng;

use crate::control::{DrawControl, DrawOptions, EditOptions};
use crate::map::Map;
use crate::session::Session;
use crate::tiles::{TileError, TileSource};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse session config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Tile(#[from] TileError),

    #[error("session config declares no tile sources")]
    NoTileSources,
}

/// One tile source entry in a session config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSourceConfig {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub attribution: String,
}

/// The JSON session document: everything needed to stand up a map with a
/// drawing control and the capture wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Id of the host element the map binds to.
    pub container: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: Vec<TileSourceConfig>,
    #[serde(default)]
    pub draw: DrawOptions,
    #[serde(default)]
    pub edit: EditOptions,
    #[serde(default = "default_policy")]
    pub capture: CapturePolicy,
    /// Id of the coordinates output element.
    #[serde(default = "default_output")]
    pub output: String,
    /// Id of the pointer readout element; absent means no readout.
    #[serde(default)]
    pub readout: Option<String>,
}

fn default_policy() -> CapturePolicy {
    CapturePolicy::TaggedRecord
}

fn default_output() -> String {
    "coordinates".to_string()
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a ready session: map, tile layers, control, capture, readout.
    pub fn build(&self) -> Result<Session, ConfigError> {
        if self.tiles.is_empty() {
            return Err(ConfigError::NoTileSources);
        }

        let mut map = Map::new(&self.container, self.center, self.zoom);
        for tile in &self.tiles {
            map.add_layer(TileSource::new(&tile.name, &tile.url, &tile.attribution)?);
        }
        map.add_control(DrawControl::new(self.draw, self.edit));

        let capture = ShapeCapture::new(self.capture, TextPanel::new(&self.output));
        let readout = self
            .readout
            .as_deref()
            .map(|id| PointerReadout::new(TextPanel::new(id)));

        log::info!(
            "session '{}': {} tile source(s), policy {:?}",
            self.container,
            self.tiles.len(),
            self.capture
        );
        Ok(Session::new(map, capture, readout))
    }
}
