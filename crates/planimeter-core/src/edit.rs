//! Drag-to-reposition editing of vertex handles.

use crate::builder::ChainBuilder;
use crate::hit_test::{find_handle_at, HandleTarget, HANDLE_RADIUS};
use crate::polygon::PolygonStore;
use kurbo::Point;

/// Owns the active drag (if any) and the advisory hover target.
///
/// At most one handle is dragged at a time; while a drag is live, every
/// pointer motion overwrites the grabbed vertex and, for store-owned
/// vertices, recomputes the owning polygon's area in the same step.
#[derive(Debug, Clone, Default)]
pub struct EditController {
    drag: Option<HandleTarget>,
    hover: Option<HandleTarget>,
}

impl EditController {
    /// Create a controller with no active drag or hover.
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle currently being dragged, if any.
    pub fn drag_target(&self) -> Option<HandleTarget> {
        self.drag
    }

    /// The handle currently under the cursor, if any. Advisory only.
    pub fn hover_target(&self) -> Option<HandleTarget> {
        self.hover
    }

    /// Whether a drag is live.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Try to grab the handle under the cursor.
    ///
    /// Ignored if a drag is already live. Returns true when a handle was
    /// grabbed, so the caller knows not to reinterpret the same gesture;
    /// false means the gesture falls through to construction handling.
    pub fn begin_drag(
        &mut self,
        cursor: Point,
        builder: &ChainBuilder,
        store: &PolygonStore,
    ) -> bool {
        if self.drag.is_some() {
            return false;
        }
        match find_handle_at(cursor, builder.chain(), store, HANDLE_RADIUS) {
            Some(target) => {
                log::debug!("drag began on {target:?}");
                self.drag = Some(target);
                true
            }
            None => false,
        }
    }

    /// Move the grabbed vertex to the cursor position.
    ///
    /// Chain vertices are overwritten in the builder; store vertices are
    /// overwritten through [`PolygonStore::set_vertex`], which recomputes the
    /// owning polygon's area before returning. No-op without an active drag.
    pub fn continue_drag(
        &mut self,
        cursor: Point,
        builder: &mut ChainBuilder,
        store: &mut PolygonStore,
    ) {
        match self.drag {
            Some(HandleTarget::Chain { vertex }) => {
                builder.set_vertex(vertex, cursor);
            }
            Some(HandleTarget::Polygon { polygon, vertex }) => {
                store.set_vertex(polygon, vertex, cursor);
            }
            None => {}
        }
    }

    /// Release the grabbed handle. No-op if none is active.
    pub fn end_drag(&mut self) {
        if let Some(target) = self.drag.take() {
            log::debug!("drag ended on {target:?}");
        }
    }

    /// Recompute the hover target for cursor affordance. Skipped while a
    /// drag is live, so the grabbed handle keeps the affordance.
    pub fn update_hover(&mut self, cursor: Point, builder: &ChainBuilder, store: &PolygonStore) {
        if self.drag.is_some() {
            return;
        }
        self.hover = find_handle_at(cursor, builder.chain(), store, HANDLE_RADIUS);
    }
}
