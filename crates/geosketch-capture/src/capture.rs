use serde::{Deserialize, Serialize};

use geosketch_core::{Shape, ShapeId, ShapeKind, ShapeStore};

use crate::panel::TextPanel;
use crate::record::CaptureRecord;

/// How a finished shape is turned into panel text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapturePolicy {
    /// Classify the shape itself and publish the bare vertex list of
    /// rectangles and polygons. Other kinds write nothing, so the panel
    /// keeps whatever it showed before.
    CoordinateList,
    /// Trust the event's kind tag and always publish a typed record, even
    /// when the record carries no geometry.
    TaggedRecord,
}

/// Converts each freshly drawn shape into coordinate text on a panel.
///
/// Every creation performs exactly one store insertion and at most one
/// panel write, raises nothing, and validates nothing: degenerate geometry
/// from the drawing host is published as-is.
pub struct ShapeCapture {
    policy: CapturePolicy,
    panel: TextPanel,
}

impl ShapeCapture {
    pub fn new(policy: CapturePolicy, panel: TextPanel) -> Self {
        Self { policy, panel }
    }

    pub fn policy(&self) -> CapturePolicy {
        self.policy
    }

    /// Current text of the output panel.
    pub fn output(&self) -> &str {
        self.panel.text()
    }

    /// Handle one shape-creation event.
    ///
    /// The shape is stored unconditionally; whether and what the panel
    /// shows afterwards depends on the policy.
    pub fn on_shape_created(
        &mut self,
        store: &mut ShapeStore,
        kind: ShapeKind,
        shape: Shape,
    ) -> ShapeId {
        let rendered = self.render(kind, &shape);
        let id = store.insert(shape);
        if let Some(text) = rendered {
            log::debug!("capture: publishing {kind} ({} bytes)", text.len());
            self.panel.set_text(&text);
        } else {
            log::debug!("capture: {kind} produced no output under {:?}", self.policy);
        }
        id
    }

    /// Handle one shape-edit event after the store has been updated.
    ///
    /// Re-renders the shape's current geometry under the same policy so the
    /// panel never shows stale coordinates for an edited shape. Unknown ids
    /// are ignored.
    pub fn on_shape_edited(&mut self, store: &ShapeStore, id: &ShapeId) {
        let Some(shape) = store.get(id) else {
            return;
        };
        if let Some(text) = self.render(shape.kind(), shape) {
            self.panel.set_text(&text);
        }
    }

    fn render(&self, kind: ShapeKind, shape: &Shape) -> Option<String> {
        match self.policy {
            // The minimal variant ignores the event tag and tests the
            // payload itself.
            CapturePolicy::CoordinateList => {
                let ring = match shape {
                    Shape::Rectangle { .. } | Shape::Polygon { .. } => shape.outer_ring()?,
                    _ => return None,
                };
                Some(serde_json::to_string_pretty(&ring).unwrap_or_default())
            }
            CapturePolicy::TaggedRecord => {
                Some(CaptureRecord::from_event(kind, shape).to_pretty_json())
            }
        }
    }
}
