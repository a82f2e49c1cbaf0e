//! # GeoSketch Core
//!
//! Geographic shape model, in-memory shape store with R-tree hit testing,
//! and the map event channel shared by the capture and host crates.

pub mod event;
pub mod geometry;
pub mod shape;
pub mod spatial;
pub mod store;

pub use event::MapEvent;
pub use geometry::{LatLng, LatLngBounds};
pub use shape::{Shape, ShapeKind};
pub use store::{ShapeId, ShapeStore};
