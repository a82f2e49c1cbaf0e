use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{LatLng, LatLngBounds, EARTH_RADIUS_M};

/// The closed set of drawable shape kinds.
///
/// Serialized tags use the drawing host's lowercase names (`"rectangle"`,
/// `"polygon"`, `"polyline"`, `"circle"`, `"marker"`, `"circlemarker"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Polygon,
    Polyline,
    Circle,
    Marker,
    CircleMarker,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Circle => "circle",
            ShapeKind::Marker => "marker",
            ShapeKind::CircleMarker => "circlemarker",
        }
    }

    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Polygon,
        ShapeKind::Polyline,
        ShapeKind::Circle,
        ShapeKind::Marker,
        ShapeKind::CircleMarker,
    ];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drawn shape with the geometry the drawing host reported for it.
///
/// Geometry is carried exactly as received; degenerate rings or paths are
/// not validated or repaired here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle {
        bounds: LatLngBounds,
    },
    /// First ring is the outer boundary; any further rings are holes.
    Polygon {
        rings: Vec<Vec<LatLng>>,
    },
    Polyline {
        path: Vec<LatLng>,
    },
    /// Radius in meters, as reported by the host (no unit conversion).
    Circle {
        center: LatLng,
        radius: f64,
    },
    Marker {
        position: LatLng,
    },
    /// Radius in screen pixels; geometric queries use only the position.
    CircleMarker {
        position: LatLng,
        radius: f64,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Polyline { .. } => ShapeKind::Polyline,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Marker { .. } => ShapeKind::Marker,
            Shape::CircleMarker { .. } => ShapeKind::CircleMarker,
        }
    }

    /// The outer vertex ring of a rectangle or polygon.
    ///
    /// Rectangles yield their four corners in the host's
    /// `[south-west, north-west, north-east, south-east]` order. Polygons
    /// yield the first ring only; holes are never exposed here. Returns
    /// `None` for every other kind and for a polygon with no rings at all.
    pub fn outer_ring(&self) -> Option<Vec<LatLng>> {
        match self {
            Shape::Rectangle { bounds } => Some(vec![
                bounds.south_west(),
                bounds.north_west(),
                bounds.north_east(),
                bounds.south_east(),
            ]),
            Shape::Polygon { rings } => rings.first().cloned(),
            _ => None,
        }
    }

    /// The vertex path of a polyline.
    pub fn path(&self) -> Option<&[LatLng]> {
        match self {
            Shape::Polyline { path } => Some(path),
            _ => None,
        }
    }

    /// The single anchor point of a circle, marker, or circle marker.
    pub fn point(&self) -> Option<LatLng> {
        match self {
            Shape::Circle { center, .. } => Some(*center),
            Shape::Marker { position } => Some(*position),
            Shape::CircleMarker { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The radius of a circle (meters) or circle marker (pixels).
    pub fn radius(&self) -> Option<f64> {
        match self {
            Shape::Circle { radius, .. } => Some(*radius),
            Shape::CircleMarker { radius, .. } => Some(*radius),
            _ => None,
        }
    }

    /// Axis-aligned geographic bounds of this shape.
    ///
    /// Circle bounds use the small-angle meters-to-degrees approximation,
    /// which is adequate for indexing and hit testing. Returns `None` for
    /// empty polygons and polylines.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            Shape::Rectangle { bounds } => Some(*bounds),
            Shape::Polygon { rings } => LatLngBounds::from_points(rings.first()?),
            Shape::Polyline { path } => LatLngBounds::from_points(path),
            Shape::Circle { center, radius } => {
                let dlat = (radius / EARTH_RADIUS_M).to_degrees();
                let dlng = dlat / center.lat.to_radians().cos().abs().max(1e-12);
                Some(LatLngBounds::new(
                    LatLng::new(center.lat - dlat, center.lng - dlng),
                    LatLng::new(center.lat + dlat, center.lng + dlng),
                ))
            }
            Shape::Marker { position } | Shape::CircleMarker { position, .. } => {
                Some(LatLngBounds::new(*position, *position))
            }
        }
    }
}
