//! The editor facade: full event-intake surface and read accessors.

use crate::builder::{ChainBuilder, EditingMode};
use crate::edit::EditController;
use crate::hit_test::HandleTarget;
use crate::input::{MouseButton, PointerEvent};
use crate::polygon::PolygonStore;
use kurbo::Point;

/// Owns the construction state machine, the edit controller, and the
/// polygon store, and sequences pointer gestures across them.
///
/// All operations are total: every call in every state produces a
/// well-defined next state, possibly identical to the current one. The
/// renderer collaborator reads state through the accessors after each
/// accepted event and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    builder: ChainBuilder,
    edit: EditController,
    store: PolygonStore,
}

impl Editor {
    /// Create an idle editor with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // --- event intake ---

    /// Append a vertex to the in-progress chain. Ignored while a drag is
    /// active, so placing can never be confused with dragging.
    pub fn place_vertex(&mut self, position: Point) {
        if self.edit.is_dragging() {
            return;
        }
        self.builder.place_vertex(position);
    }

    /// Attempt to close the chain at the cursor. Ignored while a drag is
    /// active; dragging and closing are mutually exclusive outcomes of one
    /// gesture cycle. Returns true if a polygon was finalized.
    pub fn try_close(&mut self, cursor: Point) -> bool {
        if self.edit.is_dragging() {
            return false;
        }
        match self.builder.try_close(cursor) {
            Some(polygon) => {
                self.store.push(polygon);
                true
            }
            None => false,
        }
    }

    /// Record the rubber-band preview position. Ignored while dragging.
    pub fn update_preview(&mut self, position: Point) {
        if self.edit.is_dragging() {
            return;
        }
        self.builder.update_preview(position);
    }

    /// Try to grab the handle under the cursor. Returns true if a handle
    /// was grabbed; false lets the caller fall through to construction
    /// handling of the same gesture.
    pub fn begin_drag(&mut self, cursor: Point) -> bool {
        self.edit.begin_drag(cursor, &self.builder, &self.store)
    }

    /// Move the grabbed vertex to the cursor, recomputing the owning
    /// polygon's area when the vertex belongs to a stored polygon.
    pub fn continue_drag(&mut self, cursor: Point) {
        self.edit
            .continue_drag(cursor, &mut self.builder, &mut self.store);
    }

    /// Release the grabbed handle.
    pub fn end_drag(&mut self) {
        self.edit.end_drag();
    }

    /// Recompute the hover target for cursor affordance.
    pub fn update_hover(&mut self, cursor: Point) {
        self.edit.update_hover(cursor, &self.builder, &self.store);
    }

    /// Abandon the in-progress chain. A drag grabbing a chain vertex is
    /// released first so no target outlives the chain it points into.
    pub fn cancel_chain(&mut self) {
        if matches!(self.edit.drag_target(), Some(HandleTarget::Chain { .. })) {
            self.edit.end_drag();
        }
        self.builder.cancel();
    }

    /// Route a raw pointer event to the intake surface.
    ///
    /// Primary down closes the chain when drawing and near the anchor,
    /// otherwise grabs a handle; secondary down places a vertex; motion
    /// continues a live drag or updates preview and hover; primary up
    /// releases the drag. This encodes the gesture-cycle exclusivity: a
    /// cycle that grabbed a handle never also closes or places.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                if self.mode() == EditingMode::Drawing && self.try_close(position) {
                    return;
                }
                self.begin_drag(position);
            }
            PointerEvent::Down {
                position,
                button: MouseButton::Right,
            } => {
                self.place_vertex(position);
            }
            PointerEvent::Down { .. } => {}
            PointerEvent::Move { position } => {
                if self.edit.is_dragging() {
                    self.continue_drag(position);
                } else {
                    self.update_preview(position);
                    self.update_hover(position);
                }
            }
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => {
                self.end_drag();
            }
            PointerEvent::Up { .. } => {}
        }
    }

    // --- read accessors ---

    /// Current drawing/idle mode.
    pub fn mode(&self) -> EditingMode {
        self.builder.mode()
    }

    /// The in-progress chain in placement order.
    pub fn chain(&self) -> &[Point] {
        self.builder.chain()
    }

    /// The rubber-band preview point, if any.
    pub fn preview(&self) -> Option<Point> {
        self.builder.preview()
    }

    /// The completed polygons, read-only.
    pub fn store(&self) -> &PolygonStore {
        &self.store
    }

    /// The handle under the cursor, if any.
    pub fn hover_target(&self) -> Option<HandleTarget> {
        self.edit.hover_target()
    }

    /// The handle being dragged, if any.
    pub fn drag_target(&self) -> Option<HandleTarget> {
        self.edit.drag_target()
    }

    /// Whether a drag is live.
    pub fn is_dragging(&self) -> bool {
        self.edit.is_dragging()
    }
}
