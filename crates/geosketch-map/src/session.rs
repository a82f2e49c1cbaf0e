use geosketch_capture::{PointerReadout, ShapeCapture};
use geosketch_core::{MapEvent, Shape, ShapeId, ShapeKind, ShapeStore};

use crate::control::DrawError;
use crate::map::Map;

/// Observer callback invoked after the session has routed an event.
pub type EventSubscriber = Box<dyn FnMut(&MapEvent)>;

/// The single controller owning all mutable session state: the map host,
/// the shape store, the capture component, and the optional pointer
/// readout.
///
/// Events are routed synchronously on the caller's thread, strictly in
/// dispatch order; extra subscribers are notified after the built-in
/// routing, in registration order. There is no queueing and no
/// cancellation: once dispatched, a handler runs to completion.
pub struct Session {
    map: Map,
    store: ShapeStore,
    capture: ShapeCapture,
    readout: Option<PointerReadout>,
    subscribers: Vec<EventSubscriber>,
}

impl Session {
    pub fn new(map: Map, capture: ShapeCapture, readout: Option<PointerReadout>) -> Self {
        Self {
            map,
            store: ShapeStore::new(),
            capture,
            readout,
            subscribers: Vec::new(),
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// Text currently shown on the coordinates panel.
    pub fn coordinates_text(&self) -> &str {
        self.capture.output()
    }

    /// Text currently shown on the pointer readout, if one is configured.
    pub fn readout_text(&self) -> Option<&str> {
        self.readout.as_ref().map(|r| r.output())
    }

    /// Register an observer for every dispatched event.
    pub fn subscribe(&mut self, subscriber: EventSubscriber) {
        self.subscribers.push(subscriber);
    }

    /// Route one host event, then notify subscribers.
    ///
    /// This path is deliberately permissive, like the event channel it
    /// models: creation events are accepted whatever their tag says, edits
    /// of unknown ids are dropped silently, and pointer events without a
    /// configured readout are ignored.
    pub fn dispatch(&mut self, event: MapEvent) {
        self.route(&event);
        self.notify(&event);
    }

    /// Complete a draw gesture through the drawing control.
    ///
    /// Unlike [`dispatch`](Session::dispatch), the control seam validates:
    /// the tool for `kind` must be enabled, and the tag must match the
    /// payload. On success the creation event is routed and observers are
    /// notified.
    pub fn finish_draw(&mut self, kind: ShapeKind, shape: Shape) -> Result<ShapeId, DrawError> {
        let control = self.map.control().copied().unwrap_or_default();
        if !control.is_enabled(kind) {
            return Err(DrawError::KindDisabled(kind));
        }
        if shape.kind() != kind {
            return Err(DrawError::KindMismatch {
                tag: kind,
                actual: shape.kind(),
            });
        }
        let id = self
            .capture
            .on_shape_created(&mut self.store, kind, shape.clone());
        self.notify(&MapEvent::ShapeCreated { kind, shape });
        Ok(id)
    }

    fn route(&mut self, event: &MapEvent) {
        match event {
            MapEvent::ShapeCreated { kind, shape } => {
                self.capture
                    .on_shape_created(&mut self.store, *kind, shape.clone());
            }
            MapEvent::ShapeEdited { id, shape } => {
                if self.store.replace(id, shape.clone()).is_some() {
                    self.capture.on_shape_edited(&self.store, id);
                } else {
                    log::warn!("session: edit for unknown shape {id}, dropped");
                }
            }
            MapEvent::PointerMoved { position } => {
                if let Some(readout) = self.readout.as_mut() {
                    readout.on_pointer_move(*position);
                }
            }
        }
    }

    fn notify(&mut self, event: &MapEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}
