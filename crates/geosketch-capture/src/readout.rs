use geosketch_core::LatLng;

use crate::panel::TextPanel;

/// Mirrors the pointer's current geographic position as a one-line text.
///
/// Fired on every pointer-move event, unthrottled. Purely presentational:
/// it never touches the shape store, and identical positions render
/// identical text.
pub struct PointerReadout {
    panel: TextPanel,
}

impl PointerReadout {
    pub fn new(panel: TextPanel) -> Self {
        Self { panel }
    }

    pub fn on_pointer_move(&mut self, position: LatLng) {
        // Fixed 5-decimal rounding on each axis independently.
        self.panel.set_text(&format!(
            "Lat: {:.5}, Lng: {:.5}",
            position.lat, position.lng
        ));
    }

    pub fn output(&self) -> &str {
        self.panel.text()
    }
}
