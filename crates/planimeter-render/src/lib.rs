//! Drawable-geometry building for the Planimeter editor.
//!
//! A passive reader over `planimeter-core`: invoked by the shell after each
//! accepted event, it describes what to draw and never mutates editor state.

mod scene;

pub use scene::{
    chain_path, cursor_icon, polygon_drawable, AreaLabel, CursorIcon, Frame, HandleSprite,
    HandleState, PolygonDrawable, RenderContext, Theme, HANDLE_SIZE,
};
