use std::collections::HashMap;

use uuid::Uuid;

use crate::geometry::{LatLng, LatLngBounds};
use crate::shape::Shape;
use crate::spatial::{SpatialEntry, SpatialIndex};

/// Unique shape identifier.
pub type ShapeId = Uuid;

/// The in-memory collection of every drawn shape.
///
/// Shapes stay in the store for the life of the session so they remain
/// visible and editable on the map. The store never mutates geometry on its
/// own; edits arrive through [`replace`](ShapeStore::replace). Iteration
/// follows insertion order.
pub struct ShapeStore {
    shapes: HashMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
    index: SpatialIndex,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            order: Vec::new(),
            index: SpatialIndex::new(),
        }
    }

    /// Add a shape, returning its new id.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = Uuid::new_v4();
        if let Some(bounds) = shape.bounds() {
            self.index.insert(SpatialEntry {
                shape_id: id,
                bounds,
            });
        }
        log::debug!("store: insert {} ({})", shape.kind(), id);
        self.shapes.insert(id, shape);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Swap in edited geometry for an existing shape.
    ///
    /// Returns the previous shape, or `None` (and stores nothing) when the
    /// id is unknown.
    pub fn replace(&mut self, id: &ShapeId, shape: Shape) -> Option<Shape> {
        if !self.shapes.contains_key(id) {
            return None;
        }
        let previous = self.shapes.insert(*id, shape);
        self.rebuild_index();
        previous
    }

    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let removed = self.shapes.remove(id)?;
        self.order.retain(|o| o != id);
        self.rebuild_index();
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ShapeId, &Shape)> {
        self.order.iter().filter_map(|id| {
            self.shapes.get(id).map(|shape| (id, shape))
        })
    }

    /// Ids of shapes whose bounds contain the coordinate, insertion order.
    pub fn shapes_at(&self, point: &LatLng) -> Vec<ShapeId> {
        let hits: Vec<ShapeId> = self
            .index
            .query_point(point)
            .into_iter()
            .map(|e| e.shape_id)
            .collect();
        self.order
            .iter()
            .filter(|id| hits.contains(id))
            .copied()
            .collect()
    }

    /// Union of all member bounds.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut all = self.iter().filter_map(|(_, s)| s.bounds());
        let first = all.next()?;
        Some(all.fold(first, |acc, b| acc.union(&b)))
    }

    // Replace/remove invalidate envelope positions, so the index is rebuilt
    // wholesale rather than patched in place.
    fn rebuild_index(&mut self) {
        let entries = self
            .iter()
            .filter_map(|(id, shape)| {
                shape.bounds().map(|bounds| SpatialEntry {
                    shape_id: *id,
                    bounds,
                })
            })
            .collect();
        self.index = SpatialIndex::build(entries);
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
