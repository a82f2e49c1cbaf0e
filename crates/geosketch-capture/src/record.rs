use serde::{Deserialize, Serialize};

use geosketch_core::{LatLng, Shape, ShapeKind};

/// Coordinate payload of a capture record.
///
/// Marker-like kinds publish a single point object; ring and path kinds
/// publish a sequence. The two JSON shapes are intentionally different, so
/// the union is untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Single(LatLng),
    Sequence(Vec<LatLng>),
}

/// The record published for one shape-creation event (full variant).
///
/// Only the fields relevant to the shape kind are present in the JSON:
/// rectangles, polygons, and polylines carry `coordinates` as a sequence;
/// markers carry `coordinates` as one point; circles carry `center` and
/// `radius`. A record whose tag does not match its geometry carries the
/// tag alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecord {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl CaptureRecord {
    /// Build the record for a creation event, trusting the event's tag.
    pub fn from_event(kind: ShapeKind, shape: &Shape) -> Self {
        let mut record = Self {
            kind,
            coordinates: None,
            center: None,
            radius: None,
        };
        match kind {
            ShapeKind::Rectangle | ShapeKind::Polygon => {
                record.coordinates = shape.outer_ring().map(Coordinates::Sequence);
            }
            ShapeKind::Polyline => {
                record.coordinates = shape.path().map(|p| Coordinates::Sequence(p.to_vec()));
            }
            ShapeKind::Circle => {
                if let Shape::Circle { center, radius } = shape {
                    record.center = Some(*center);
                    record.radius = Some(*radius);
                }
            }
            ShapeKind::Marker | ShapeKind::CircleMarker => {
                record.coordinates = shape.point().map(Coordinates::Single);
            }
        }
        record
    }

    /// Indented JSON, matching the host page's two-space pretty printing.
    pub fn to_pretty_json(&self) -> String {
        // CaptureRecord serialization cannot fail: no maps, no non-string keys.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geosketch_core::LatLngBounds;

    #[test]
    fn test_circle_record_has_center_and_radius_only() {
        let shape = Shape::Circle {
            center: LatLng::new(51.505, -0.09),
            radius: 500.0,
        };
        let record = CaptureRecord::from_event(ShapeKind::Circle, &shape);
        assert!(record.coordinates.is_none());
        assert_eq!(record.center, Some(LatLng::new(51.505, -0.09)));
        assert_eq!(record.radius, Some(500.0));

        let json = record.to_pretty_json();
        assert!(json.contains("\"type\": \"circle\""));
        assert!(!json.contains("coordinates"));
    }

    #[test]
    fn test_marker_record_is_single_point() {
        let shape = Shape::Marker {
            position: LatLng::new(51.5, -0.12),
        };
        let record = CaptureRecord::from_event(ShapeKind::Marker, &shape);
        assert_eq!(
            record.coordinates,
            Some(Coordinates::Single(LatLng::new(51.5, -0.12)))
        );

        // A single point serializes as an object, not a one-element array.
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"coordinates\":{\"lat\""));
    }

    #[test]
    fn test_polyline_record_preserves_path_order() {
        let path = vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(2.0, 0.5),
        ];
        let shape = Shape::Polyline { path: path.clone() };
        let record = CaptureRecord::from_event(ShapeKind::Polyline, &shape);
        assert_eq!(record.coordinates, Some(Coordinates::Sequence(path)));
    }

    #[test]
    fn test_rectangle_record_uses_corner_ring() {
        let shape = Shape::Rectangle {
            bounds: LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)),
        };
        let record = CaptureRecord::from_event(ShapeKind::Rectangle, &shape);
        match record.coordinates {
            Some(Coordinates::Sequence(ring)) => assert_eq!(ring.len(), 4),
            other => panic!("expected corner sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_tag_yields_type_only_record() {
        // Tag claims circle, payload is a polyline: geometry fields stay empty.
        let shape = Shape::Polyline {
            path: vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
        };
        let record = CaptureRecord::from_event(ShapeKind::Circle, &shape);
        assert!(record.coordinates.is_none());
        assert!(record.center.is_none());
        assert!(record.radius.is_none());
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            "{\"type\":\"circle\"}"
        );
    }
}
