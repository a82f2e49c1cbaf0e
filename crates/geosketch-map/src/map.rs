use geosketch_core::LatLng;

use crate::control::DrawControl;
use crate::tiles::TileSource;
use crate::view::MapView;

/// The map host: a named container element, a viewport, base tile layers
/// with a switcher, and an optional drawing control.
pub struct Map {
    container: String,
    view: MapView,
    layers: Vec<TileSource>,
    active_layer: usize,
    control: Option<DrawControl>,
}

impl Map {
    /// Construct a map bound to a container element with an initial view.
    pub fn new(container: &str, center: LatLng, zoom: u8) -> Self {
        Self {
            container: container.to_string(),
            view: MapView::new(center, zoom, 1024.0, 768.0),
            layers: Vec::new(),
            active_layer: 0,
            control: None,
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    /// Add a base tile layer. The first layer added becomes active.
    pub fn add_layer(&mut self, source: TileSource) {
        log::info!("map '{}': add tile layer '{}'", self.container, source.name);
        self.layers.push(source);
    }

    /// Switch the active base layer by name. Returns false for unknown names.
    pub fn set_active_layer(&mut self, name: &str) -> bool {
        match self.layers.iter().position(|l| l.name == name) {
            Some(index) => {
                self.active_layer = index;
                true
            }
            None => false,
        }
    }

    pub fn active_layer(&self) -> Option<&TileSource> {
        self.layers.get(self.active_layer)
    }

    pub fn layers(&self) -> &[TileSource] {
        &self.layers
    }

    pub fn add_control(&mut self, control: DrawControl) {
        self.control = Some(control);
    }

    pub fn control(&self) -> Option<&DrawControl> {
        self.control.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osm() -> TileSource {
        TileSource::new(
            "osm",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "© OpenStreetMap contributors",
        )
        .unwrap()
    }

    #[test]
    fn test_construct_with_view() {
        let map = Map::new("map", LatLng::new(51.505, -0.09), 13);
        assert_eq!(map.container(), "map");
        assert_eq!(map.view().zoom, 13);
        assert!(map.active_layer().is_none());
    }

    #[test]
    fn test_layer_switcher() {
        let mut map = Map::new("map", LatLng::new(0.0, 0.0), 3);
        map.add_layer(osm());
        map.add_layer(
            TileSource::new("topo", "https://tile.example.org/{z}/{x}/{y}.png", "").unwrap(),
        );
        assert_eq!(map.active_layer().unwrap().name, "osm");

        assert!(map.set_active_layer("topo"));
        assert_eq!(map.active_layer().unwrap().name, "topo");
        assert!(!map.set_active_layer("satellite"));
        assert_eq!(map.active_layer().unwrap().name, "topo");
    }
}
