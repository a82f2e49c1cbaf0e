//! # GeoSketch Capture
//!
//! The shape-capture component: converts each freshly drawn shape into
//! pretty-printed coordinate JSON on an output panel, and the pointer
//! readout that tracks the cursor's geographic position.
//!
//! Two capture policies exist. `CoordinateList` reproduces the minimal
//! behavior (bare vertex lists for rectangles and polygons only, stale
//! panel otherwise); `TaggedRecord` always publishes a typed record built
//! from the creation event's kind tag.

pub mod capture;
pub mod panel;
pub mod readout;
pub mod record;

pub use capture::{CapturePolicy, ShapeCapture};
pub use panel::TextPanel;
pub use readout::PointerReadout;
pub use record::{CaptureRecord, Coordinates};
