//! Planimeter Core Library
//!
//! Platform-agnostic state machine for sketching simple polygons with a
//! pointer and measuring their enclosed areas. The presentation layer feeds
//! pointer events in and reads state back out; it never mutates state.

pub mod builder;
pub mod edit;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod polygon;

pub use builder::{ChainBuilder, EditingMode, MIN_CLOSE_VERTICES};
pub use edit::EditController;
pub use editor::Editor;
pub use hit_test::{find_handle_at, HandleTarget, HANDLE_RADIUS};
pub use input::{MouseButton, PointerEvent};
pub use polygon::{DocumentError, Polygon, PolygonId, PolygonStore};
