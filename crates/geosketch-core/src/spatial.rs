use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::geometry::{LatLng, LatLngBounds};
use crate::store::ShapeId;

/// An entry in the R-tree spatial index, referencing a stored shape by id.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialEntry {
    pub shape_id: ShapeId,
    pub bounds: LatLngBounds,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.south_west.lng, self.bounds.south_west.lat],
            [self.bounds.north_east.lng, self.bounds.north_east.lat],
        )
    }
}

impl PointDistance for SpatialEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope().distance_2(point)
    }
}

/// Spatial index over shape bounds for point queries and viewport culling.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build the index from a list of shape bounds.
    pub fn build(entries: Vec<SpatialEntry>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn insert(&mut self, entry: SpatialEntry) {
        self.tree.insert(entry);
    }

    pub fn remove(&mut self, entry: &SpatialEntry) -> bool {
        self.tree.remove(entry).is_some()
    }

    /// All entries whose bounds contain the given coordinate.
    pub fn query_point(&self, point: &LatLng) -> Vec<&SpatialEntry> {
        self.tree
            .locate_all_at_point(&[point.lng, point.lat])
            .collect()
    }

    /// All entries intersecting the given viewport bounds.
    pub fn query_bounds(&self, bounds: &LatLngBounds) -> Vec<&SpatialEntry> {
        let envelope = AABB::from_corners(
            [bounds.south_west.lng, bounds.south_west.lat],
            [bounds.north_east.lng, bounds.north_east.lat],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(sw: (f64, f64), ne: (f64, f64)) -> SpatialEntry {
        SpatialEntry {
            shape_id: Uuid::new_v4(),
            bounds: LatLngBounds::new(LatLng::new(sw.0, sw.1), LatLng::new(ne.0, ne.1)),
        }
    }

    #[test]
    fn test_point_query() {
        let a = entry((0.0, 0.0), (10.0, 10.0));
        let b = entry((20.0, 20.0), (30.0, 30.0));
        let a_id = a.shape_id;
        let index = SpatialIndex::build(vec![a, b]);

        let hits = index.query_point(&LatLng::new(5.0, 5.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].shape_id, a_id);

        assert!(index.query_point(&LatLng::new(15.0, 15.0)).is_empty());
    }

    #[test]
    fn test_point_on_boundary_is_a_hit() {
        let a = entry((0.0, 0.0), (10.0, 10.0));
        let id = a.shape_id;
        let index = SpatialIndex::build(vec![a]);

        let hits = index.query_point(&LatLng::new(10.0, 0.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].shape_id, id);
        // Contained points are at distance zero from the entry.
        assert_eq!(hits[0].distance_2(&[0.0, 10.0]), 0.0);
        assert!(hits[0].distance_2(&[20.0, 10.0]) > 0.0);
    }

    #[test]
    fn test_bounds_query_and_remove() {
        let a = entry((0.0, 0.0), (10.0, 10.0));
        let mut index = SpatialIndex::new();
        index.insert(a.clone());
        assert_eq!(index.len(), 1);

        let viewport = LatLngBounds::new(LatLng::new(-5.0, -5.0), LatLng::new(15.0, 15.0));
        assert_eq!(index.query_bounds(&viewport).len(), 1);

        assert!(index.remove(&a));
        assert!(index.is_empty());
    }
}
