use serde::{Deserialize, Serialize};
use thiserror::Error;

use geosketch_core::ShapeKind;

#[derive(Error, Debug, PartialEq)]
pub enum DrawError {
    #[error("drawing tool for {0} is not enabled on this control")]
    KindDisabled(ShapeKind),
    #[error("event tagged {tag} but the payload is a {actual}")]
    KindMismatch { tag: ShapeKind, actual: ShapeKind },
}

/// Which drawing tools the control offers.
///
/// Defaults match the original page: polygon and rectangle on, everything
/// else off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    pub polygon: bool,
    pub polyline: bool,
    pub circle: bool,
    pub marker: bool,
    pub circlemarker: bool,
    pub rectangle: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            polygon: true,
            polyline: false,
            circle: false,
            marker: false,
            circlemarker: false,
            rectangle: true,
        }
    }
}

impl DrawOptions {
    /// Enable every drawing tool.
    pub fn all() -> Self {
        Self {
            polygon: true,
            polyline: true,
            circle: true,
            marker: true,
            circlemarker: true,
            rectangle: true,
        }
    }

    pub fn is_enabled(&self, kind: ShapeKind) -> bool {
        match kind {
            ShapeKind::Rectangle => self.rectangle,
            ShapeKind::Polygon => self.polygon,
            ShapeKind::Polyline => self.polyline,
            ShapeKind::Circle => self.circle,
            ShapeKind::Marker => self.marker,
            ShapeKind::CircleMarker => self.circlemarker,
        }
    }
}

/// Whether drawn shapes may be reshaped or moved afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EditOptions {
    pub enabled: bool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// The drawing control attached to a map: tool toggles plus edit mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DrawControl {
    #[serde(default)]
    pub draw: DrawOptions,
    #[serde(default)]
    pub edit: EditOptions,
}

impl DrawControl {
    pub fn new(draw: DrawOptions, edit: EditOptions) -> Self {
        Self { draw, edit }
    }

    pub fn is_enabled(&self, kind: ShapeKind) -> bool {
        self.draw.is_enabled(kind)
    }
}
