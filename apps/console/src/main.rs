//! Headless GeoSketch session: stands up a map from a JSON config, replays
//! a scripted drawing sequence, and prints the output panels after each
//! step, the way the browser page would repaint them.

use std::error::Error;

use geosketch_core::{LatLng, LatLngBounds, MapEvent, Shape, ShapeKind};
use geosketch_map::SessionConfig;

const CONFIG: &str = r#"{
    "container": "map",
    "center": { "lat": 51.505, "lng": -0.09 },
    "zoom": 13,
    "tiles": [
        {
            "name": "osm",
            "url": "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "attribution": "© OpenStreetMap contributors"
        },
        {
            "name": "topo",
            "url": "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            "attribution": "© OpenTopoMap (CC-BY-SA)"
        }
    ],
    "draw": {
        "polygon": true,
        "polyline": true,
        "circle": true,
        "marker": true,
        "circlemarker": true,
        "rectangle": true
    },
    "capture": "tagged-record",
    "output": "coordinates",
    "readout": "mouse-position-container"
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = SessionConfig::from_json(CONFIG)?;
    let mut session = config.build()?;
    log::info!(
        "session ready on '{}' at ({}, {}) z{}",
        session.map().container(),
        session.map().view().center.lat,
        session.map().view().center.lng,
        session.map().view().zoom,
    );

    // A scripted draw sequence covering every tool.
    let gestures = [
        (
            ShapeKind::Rectangle,
            Shape::Rectangle {
                bounds: LatLngBounds::new(
                    LatLng::new(51.49, -0.12),
                    LatLng::new(51.51, -0.08),
                ),
            },
        ),
        (
            ShapeKind::Polygon,
            Shape::Polygon {
                rings: vec![vec![
                    LatLng::new(51.515, -0.1),
                    LatLng::new(51.52, -0.09),
                    LatLng::new(51.51, -0.085),
                ]],
            },
        ),
        (
            ShapeKind::Circle,
            Shape::Circle {
                center: LatLng::new(51.505, -0.09),
                radius: 500.0,
            },
        ),
        (
            ShapeKind::Polyline,
            Shape::Polyline {
                path: vec![
                    LatLng::new(51.5, -0.1),
                    LatLng::new(51.502, -0.095),
                    LatLng::new(51.504, -0.092),
                ],
            },
        ),
        (
            ShapeKind::Marker,
            Shape::Marker {
                position: LatLng::new(51.5073219, -0.1276474),
            },
        ),
    ];

    let mut last_id = None;
    for (kind, shape) in gestures {
        let id = session.finish_draw(kind, shape)?;
        last_id = Some(id);
        println!("-- drew {kind} ({id})");
        println!("{}\n", session.coordinates_text());
    }

    // Sweep the pointer across the canvas; the readout tracks each sample.
    for step in 0..=4 {
        let x = 212.0 + 150.0 * f64::from(step);
        let position = session.map().view().screen_to_lat_lng(x, 384.0);
        session.dispatch(MapEvent::PointerMoved { position });
        println!(
            "pointer at x={x:>5}: {}",
            session.readout_text().unwrap_or_default()
        );
    }

    // Move the last marker; the panel follows the edit.
    if let Some(id) = last_id {
        session.dispatch(MapEvent::ShapeEdited {
            id,
            shape: Shape::Marker {
                position: LatLng::new(48.8584, 2.2945),
            },
        });
        println!("\n-- after edit of {id}");
        println!("{}", session.coordinates_text());
    }

    println!(
        "\n{} shapes stored, covering {:?}",
        session.store().len(),
        session.store().bounds(),
    );
    if let Some(layer) = session.map().active_layer() {
        println!("sample tile: {}", layer.tile_url(4093, 2723, 13));
    }
    Ok(())
}
