//! # GeoSketch Map
//!
//! The map host side of a drawing session: Web Mercator viewport, raster
//! tile sources with a layer switcher, the drawing control's tool
//! configuration, and the [`Session`] controller that routes host events
//! into the capture component.

pub mod config;
pub mod control;
pub mod map;
pub mod session;
pub mod tiles;
pub mod view;

pub use config::{ConfigError, SessionConfig, TileSourceConfig};
pub use control::{DrawControl, DrawError, DrawOptions, EditOptions};
pub use map::Map;
pub use session::Session;
pub use tiles::{TileError, TileSource};
pub use view::MapView;
