use serde::{Deserialize, Serialize};

/// Mean earth radius in meters, as used for haversine distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another coordinate, in meters (haversine).
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }
}

/// An axis-aligned geographic bounding box.
///
/// Corners are normalized on construction so that `south_west` always holds
/// the minimum latitude/longitude. Antimeridian-crossing boxes are not
/// handled; coordinates are trusted from the drawing host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(corner1: LatLng, corner2: LatLng) -> Self {
        Self {
            south_west: LatLng::new(corner1.lat.min(corner2.lat), corner1.lng.min(corner2.lng)),
            north_east: LatLng::new(corner1.lat.max(corner2.lat), corner1.lng.max(corner2.lng)),
        }
    }

    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut min_lng = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut max_lng = f64::MIN;
        for p in points {
            min_lat = min_lat.min(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lat = max_lat.max(p.lat);
            max_lng = max_lng.max(p.lng);
        }
        Some(Self {
            south_west: LatLng::new(min_lat, min_lng),
            north_east: LatLng::new(max_lat, max_lng),
        })
    }

    pub fn south_west(&self) -> LatLng {
        self.south_west
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north_east.lat, self.south_west.lng)
    }

    pub fn north_east(&self) -> LatLng {
        self.north_east
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south_west.lat, self.north_east.lng)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    pub fn lng_span(&self) -> f64 {
        self.north_east.lng - self.south_west.lng
    }

    pub fn contains(&self, p: &LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }

    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        self.south_west.lat <= other.north_east.lat
            && self.north_east.lat >= other.south_west.lat
            && self.south_west.lng <= other.north_east.lng
            && self.north_east.lng >= other.south_west.lng
    }

    pub fn union(&self, other: &LatLngBounds) -> Self {
        Self {
            south_west: LatLng::new(
                self.south_west.lat.min(other.south_west.lat),
                self.south_west.lng.min(other.south_west.lng),
            ),
            north_east: LatLng::new(
                self.north_east.lat.max(other.north_east.lat),
                self.north_east.lng.max(other.north_east.lng),
            ),
        }
    }

    /// Grow the box just enough to include `p`.
    pub fn extend(&mut self, p: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(p.lat);
        self.south_west.lng = self.south_west.lng.min(p.lng);
        self.north_east.lat = self.north_east.lat.max(p.lat);
        self.north_east.lng = self.north_east.lng.max(p.lng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_haversine() {
        // London to Paris, roughly 344 km.
        let london = LatLng::new(51.5074, -0.1278);
        let paris = LatLng::new(48.8566, 2.3522);
        let d = london.distance_to(&paris);
        assert!((d - 344_000.0).abs() < 5_000.0);
    }

    #[test]
    fn test_distance_zero() {
        let p = LatLng::new(51.505, -0.09);
        assert!(p.distance_to(&p).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_normalize_corners() {
        let b = LatLngBounds::new(LatLng::new(51.51, -0.08), LatLng::new(51.49, -0.12));
        assert!((b.south_west.lat - 51.49).abs() < 1e-12);
        assert!((b.south_west.lng - -0.12).abs() < 1e-12);
        assert!((b.north_east.lat - 51.51).abs() < 1e-12);
        assert!((b.north_east.lng - -0.08).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_contains_and_intersects() {
        let a = LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0));
        let b = LatLngBounds::new(LatLng::new(5.0, 5.0), LatLng::new(15.0, 15.0));
        let c = LatLngBounds::new(LatLng::new(20.0, 20.0), LatLng::new(30.0, 30.0));
        assert!(a.contains(&LatLng::new(5.0, 5.0)));
        assert!(!a.contains(&LatLng::new(11.0, 5.0)));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_bounds_from_points_empty() {
        assert!(LatLngBounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_union_and_extend() {
        let a = LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0));
        let b = LatLngBounds::new(LatLng::new(2.0, -1.0), LatLng::new(3.0, 0.5));
        let u = a.union(&b);
        assert!((u.south_west.lng - -1.0).abs() < 1e-12);
        assert!((u.north_east.lat - 3.0).abs() < 1e-12);

        let mut e = a;
        e.extend(&LatLng::new(-5.0, 4.0));
        assert!((e.south_west.lat - -5.0).abs() < 1e-12);
        assert!((e.north_east.lng - 4.0).abs() < 1e-12);
    }
}
