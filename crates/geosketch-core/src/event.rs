use serde::{Deserialize, Serialize};

use crate::geometry::LatLng;
use crate::shape::{Shape, ShapeKind};
use crate::store::ShapeId;

/// An event dispatched by the map host to the session.
///
/// Shape-creation events carry an explicit kind tag set once when the draw
/// gesture finishes, so consumers never have to classify the payload by
/// inspecting its concrete variant. Delivery is synchronous and
/// single-threaded: handlers run to completion in dispatch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The user finished drawing a shape.
    ShapeCreated { kind: ShapeKind, shape: Shape },
    /// An existing shape was reshaped or moved via the edit tools.
    ShapeEdited { id: ShapeId, shape: Shape },
    /// The pointer moved over the map surface. High frequency, unthrottled.
    PointerMoved { position: LatLng },
}

impl MapEvent {
    /// Creation event with the tag derived from the payload itself.
    pub fn created(shape: Shape) -> Self {
        MapEvent::ShapeCreated {
            kind: shape.kind(),
            shape,
        }
    }
}
