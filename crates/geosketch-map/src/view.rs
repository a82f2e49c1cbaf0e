use serde::{Deserialize, Serialize};

use geosketch_core::{LatLng, LatLngBounds};

/// Tile size in pixels, fixed by the slippy-map tiling scheme.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// The pannable, zoomable map viewport.
///
/// Projection follows the standard Web Mercator tile scheme: at zoom `z`
/// the world is `256 * 2^z` pixels square. Screen coordinates are pixels
/// with the view center at the middle of the canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Canvas width in pixels.
    pub width_px: f64,
    /// Canvas height in pixels.
    pub height_px: f64,
}

impl MapView {
    pub fn new(center: LatLng, zoom: u8, width_px: f64, height_px: f64) -> Self {
        let min_zoom = 0;
        let max_zoom = 19;
        Self {
            center,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            width_px,
            height_px,
        }
    }

    /// Move the view to a new center and zoom level.
    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = center;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(self.max_zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(self.min_zoom);
    }

    /// World size in pixels at the current zoom.
    fn world_size(&self) -> f64 {
        TILE_SIZE * f64::from(1u32 << u32::from(self.zoom))
    }

    /// Project a coordinate to world pixel space at the current zoom.
    pub fn project(&self, p: &LatLng) -> (f64, f64) {
        let size = self.world_size();
        let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (p.lng + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
        (x, y)
    }

    /// Inverse of [`project`](MapView::project).
    pub fn unproject(&self, x: f64, y: f64) -> LatLng {
        let size = self.world_size();
        let lng = x / size * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
        let lat = n.sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }

    /// Convert canvas pixel coordinates to a geographic position.
    ///
    /// This is how a headless host synthesizes pointer-move events from raw
    /// cursor positions.
    pub fn screen_to_lat_lng(&self, screen_x: f64, screen_y: f64) -> LatLng {
        let (cx, cy) = self.project(&self.center);
        self.unproject(
            cx + screen_x - self.width_px / 2.0,
            cy + screen_y - self.height_px / 2.0,
        )
    }

    /// Convert a geographic position to canvas pixel coordinates.
    pub fn lat_lng_to_screen(&self, p: &LatLng) -> (f64, f64) {
        let (cx, cy) = self.project(&self.center);
        let (x, y) = self.project(p);
        (x - cx + self.width_px / 2.0, y - cy + self.height_px / 2.0)
    }

    /// Center on `bounds` at the highest zoom that shows all of it.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.center = bounds.center();
        let mut zoom = self.max_zoom;
        while zoom > self.min_zoom {
            self.zoom = zoom;
            let (x1, y1) = self.project(&bounds.north_west());
            let (x2, y2) = self.project(&bounds.south_east());
            if (x2 - x1).abs() <= self.width_px && (y2 - y1).abs() <= self.height_px {
                return;
            }
            zoom -= 1;
        }
        self.zoom = self.min_zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> MapView {
        MapView::new(LatLng::new(51.505, -0.09), 13, 1024.0, 768.0)
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let v = view();
        let p = LatLng::new(51.5073219, -0.1276474);
        let (x, y) = v.project(&p);
        let back = v.unproject(x, y);
        assert!((back.lat - p.lat).abs() < 1e-9);
        assert!((back.lng - p.lng).abs() < 1e-9);
    }

    #[test]
    fn test_center_maps_to_canvas_middle() {
        let v = view();
        let (sx, sy) = v.lat_lng_to_screen(&v.center);
        assert!((sx - 512.0).abs() < 1e-9);
        assert!((sy - 384.0).abs() < 1e-9);

        let back = v.screen_to_lat_lng(512.0, 384.0);
        assert!((back.lat - v.center.lat).abs() < 1e-9);
        assert!((back.lng - v.center.lng).abs() < 1e-9);
    }

    #[test]
    fn test_construct_with_excessive_zoom() {
        // A zoom beyond the slippy-map range must clamp, not overflow the
        // world-size shift on the first projection.
        let v = MapView::new(LatLng::new(51.505, -0.09), 40, 1024.0, 768.0);
        assert_eq!(v.zoom, v.max_zoom);
        let p = v.screen_to_lat_lng(512.0, 384.0);
        assert!((p.lat - 51.505).abs() < 1e-9);
        assert!((p.lng - -0.09).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamping() {
        let mut v = view();
        v.set_view(v.center, 40);
        assert_eq!(v.zoom, v.max_zoom);
        for _ in 0..40 {
            v.zoom_out();
        }
        assert_eq!(v.zoom, v.min_zoom);
        v.zoom_in();
        assert_eq!(v.zoom, 1);
    }

    #[test]
    fn test_fit_bounds_contains_corners() {
        let mut v = view();
        let bounds = LatLngBounds::new(LatLng::new(51.4, -0.3), LatLng::new(51.6, 0.1));
        v.fit_bounds(&bounds);

        let (x1, y1) = v.lat_lng_to_screen(&bounds.north_west());
        let (x2, y2) = v.lat_lng_to_screen(&bounds.south_east());
        assert!(x1 >= 0.0 && x2 <= v.width_px);
        assert!(y1 >= 0.0 && y2 <= v.height_px);
        // A tighter fit should be impossible one zoom level up.
        assert!(v.zoom < v.max_zoom);
    }
}
