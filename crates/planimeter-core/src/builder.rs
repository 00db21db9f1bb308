//! Polygon construction: the in-progress vertex chain and its state machine.

use crate::geometry::distance;
use crate::hit_test::HANDLE_RADIUS;
use crate::polygon::Polygon;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A polygon needs at least this many vertices to close.
pub const MIN_CLOSE_VERTICES: usize = 3;

/// Whether a polygon is currently under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditingMode {
    /// No open chain.
    #[default]
    Idle,
    /// At least one vertex placed, chain still open.
    Drawing,
}

/// Owns the in-progress vertex chain, the transient rubber-band preview
/// point, and the drawing/idle mode.
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    chain: Vec<Point>,
    preview: Option<Point>,
    mode: EditingMode,
}

impl ChainBuilder {
    /// Create an idle builder with an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The open chain, in placement order. Index 0 is the closing anchor.
    pub fn chain(&self) -> &[Point] {
        &self.chain
    }

    /// The rubber-band preview point, if one has been recorded.
    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    /// Current drawing/idle mode.
    pub fn mode(&self) -> EditingMode {
        self.mode
    }

    /// Append a vertex to the chain. The first vertex moves the builder
    /// from `Idle` to `Drawing`.
    pub fn place_vertex(&mut self, position: Point) {
        if self.chain.is_empty() {
            log::debug!("chain started at ({:.1}, {:.1})", position.x, position.y);
            self.mode = EditingMode::Drawing;
        }
        self.chain.push(position);
    }

    /// Record the cursor position for rendering the rubber-band segment from
    /// the last placed vertex. Does not mutate the chain; ignored while idle.
    pub fn update_preview(&mut self, position: Point) {
        if self.mode == EditingMode::Drawing {
            self.preview = Some(position);
        }
    }

    /// Attempt to close the chain at the cursor position.
    ///
    /// Closing requires the cursor within [`HANDLE_RADIUS`] of the anchor
    /// vertex AND a chain of at least [`MIN_CLOSE_VERTICES`]; the two guards
    /// are independent, and failing either leaves the chain open (silent
    /// no-op). On success the finalized polygon is returned, the chain and
    /// preview are cleared, and the builder returns to `Idle`.
    pub fn try_close(&mut self, cursor: Point) -> Option<Polygon> {
        let anchor = *self.chain.first()?;
        if distance(cursor, anchor) > HANDLE_RADIUS {
            return None;
        }
        if self.chain.len() < MIN_CLOSE_VERTICES {
            log::debug!("close ignored: chain has {} vertices", self.chain.len());
            return None;
        }

        let polygon = Polygon::new(std::mem::take(&mut self.chain));
        self.preview = None;
        self.mode = EditingMode::Idle;
        Some(polygon)
    }

    /// Abandon the open chain and return to `Idle`.
    pub fn cancel(&mut self) {
        if !self.chain.is_empty() {
            log::debug!("chain abandoned with {} vertices", self.chain.len());
        }
        self.chain.clear();
        self.preview = None;
        self.mode = EditingMode::Idle;
    }

    /// Overwrite a chain vertex in place (used while dragging a chain
    /// handle). Out-of-range indices are ignored.
    pub(crate) fn set_vertex(&mut self, index: usize, position: Point) -> bool {
        match self.chain.get_mut(index) {
            Some(p) => {
                *p = position;
                true
            }
            None => false,
        }
    }
}
