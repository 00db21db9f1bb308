//! Frame building: turns editor state into drawable geometry.
//!
//! Everything here is a pure read of the editor. The windowing shell decides
//! how to stroke, fill, and letter the result; this crate only says what is
//! where.

use kurbo::{BezPath, Point};
use peniko::Color;
use planimeter_core::geometry::centroid;
use planimeter_core::{Editor, EditingMode, HandleTarget, Polygon};

/// Drawn diameter of a vertex handle, in surface pixels.
pub const HANDLE_SIZE: f64 = 8.0;

/// Colors used when drawing a frame.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub polygon_stroke: Color,
    pub polygon_fill: Color,
    pub chain_stroke: Color,
    pub handle_fill: Color,
    pub handle_active: Color,
    pub label_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(250, 250, 250, 255),
            polygon_stroke: Color::from_rgba8(30, 30, 30, 255),
            polygon_fill: Color::from_rgba8(100, 150, 230, 60),
            chain_stroke: Color::from_rgba8(200, 80, 40, 255),
            handle_fill: Color::from_rgba8(255, 255, 255, 255),
            handle_active: Color::from_rgba8(230, 150, 40, 255),
            label_text: Color::from_rgba8(30, 30, 30, 255),
        }
    }
}

/// Cursor affordance derived from editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Drawing a chain, cursor away from any handle.
    Crosshair,
    /// Hovering a grabbable handle.
    Grab,
    /// A drag is live.
    Grabbing,
}

/// Visual state of a single handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    Normal,
    Hovered,
    Dragged,
}

/// A drawable vertex handle.
#[derive(Debug, Clone, Copy)]
pub struct HandleSprite {
    pub position: Point,
    pub target: HandleTarget,
    pub state: HandleState,
}

/// A stored polygon ready to draw: its closed outline and area label.
#[derive(Debug, Clone)]
pub struct PolygonDrawable {
    pub path: BezPath,
    pub label: AreaLabel,
}

/// An area readout anchored at the polygon's centroid.
#[derive(Debug, Clone)]
pub struct AreaLabel {
    pub anchor: Point,
    pub text: String,
}

/// Everything the shell needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub polygons: Vec<PolygonDrawable>,
    /// Open chain outline including the rubber-band segment, if drawing.
    pub chain: Option<BezPath>,
    pub handles: Vec<HandleSprite>,
    pub cursor: CursorIcon,
}

/// Borrow of the editor plus drawing parameters for one frame.
pub struct RenderContext<'a> {
    pub editor: &'a Editor,
    pub theme: Theme,
}

impl<'a> RenderContext<'a> {
    /// Create a context with the default theme.
    pub fn new(editor: &'a Editor) -> Self {
        Self {
            editor,
            theme: Theme::default(),
        }
    }

    /// Build the drawable description of the current editor state.
    pub fn build_frame(&self) -> Frame {
        Frame {
            polygons: self
                .editor
                .store()
                .iter()
                .map(polygon_drawable)
                .collect(),
            chain: chain_path(self.editor.chain(), self.editor.preview()),
            handles: self.handles(),
            cursor: cursor_icon(self.editor),
        }
    }

    fn handles(&self) -> Vec<HandleSprite> {
        let drag = self.editor.drag_target();
        let hover = self.editor.hover_target();
        let state_for = |target: HandleTarget| {
            if drag == Some(target) {
                HandleState::Dragged
            } else if hover == Some(target) {
                HandleState::Hovered
            } else {
                HandleState::Normal
            }
        };

        let mut handles = Vec::new();
        for (vertex, &position) in self.editor.chain().iter().enumerate() {
            let target = HandleTarget::Chain { vertex };
            handles.push(HandleSprite {
                position,
                target,
                state: state_for(target),
            });
        }
        for (polygon, poly) in self.editor.store().iter().enumerate() {
            for (vertex, &position) in poly.points().iter().enumerate() {
                let target = HandleTarget::Polygon { polygon, vertex };
                handles.push(HandleSprite {
                    position,
                    target,
                    state: state_for(target),
                });
            }
        }
        handles
    }
}

/// Closed outline and centroid-anchored area label for a stored polygon.
pub fn polygon_drawable(polygon: &Polygon) -> PolygonDrawable {
    let points = polygon.points();
    let mut path = BezPath::new();
    if let Some((&first, rest)) = points.split_first() {
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        path.close_path();
    }

    PolygonDrawable {
        path,
        label: AreaLabel {
            anchor: centroid(points),
            text: format!("{:.1}", polygon.area()),
        },
    }
}

/// Open polyline for the in-progress chain, with the rubber-band segment to
/// the preview point appended. None when nothing has been placed.
pub fn chain_path(chain: &[Point], preview: Option<Point>) -> Option<BezPath> {
    let first = *chain.first()?;
    let mut path = BezPath::new();
    path.move_to(first);
    for &p in &chain[1..] {
        path.line_to(p);
    }
    if let Some(p) = preview {
        path.line_to(p);
    }
    Some(path)
}

/// Derive the cursor affordance: grabbing beats grab beats crosshair.
pub fn cursor_icon(editor: &Editor) -> CursorIcon {
    if editor.is_dragging() {
        CursorIcon::Grabbing
    } else if editor.hover_target().is_some() {
        CursorIcon::Grab
    } else if editor.mode() == EditingMode::Drawing {
        CursorIcon::Crosshair
    } else {
        CursorIcon::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_square() -> Editor {
        let mut editor = Editor::new();
        editor.place_vertex(Point::new(0.0, 0.0));
        editor.place_vertex(Point::new(10.0, 0.0));
        editor.place_vertex(Point::new(10.0, 10.0));
        editor.place_vertex(Point::new(0.0, 10.0));
        editor.try_close(Point::new(0.0, 0.0));
        editor
    }

    #[test]
    fn test_frame_for_idle_editor() {
        let editor = Editor::new();
        let frame = RenderContext::new(&editor).build_frame();
        assert!(frame.polygons.is_empty());
        assert!(frame.chain.is_none());
        assert!(frame.handles.is_empty());
        assert_eq!(frame.cursor, CursorIcon::Default);
    }

    #[test]
    fn test_polygon_label_anchor_and_text() {
        let editor = editor_with_square();
        let frame = RenderContext::new(&editor).build_frame();

        assert_eq!(frame.polygons.len(), 1);
        let label = &frame.polygons[0].label;
        assert_eq!(label.text, "100.0");
        assert!((label.anchor.x - 5.0).abs() < 1e-9);
        assert!((label.anchor.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_chain_path_includes_rubber_band() {
        let chain = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let path = chain_path(&chain, Some(Point::new(10.0, 10.0))).unwrap();
        // move_to plus two line_to segments.
        assert_eq!(path.elements().len(), 3);

        assert!(chain_path(&[], None).is_none());
    }

    #[test]
    fn test_handle_states_follow_editor() {
        let mut editor = editor_with_square();
        editor.update_hover(Point::new(10.0, 0.0));

        let frame = RenderContext::new(&editor).build_frame();
        assert_eq!(frame.handles.len(), 4);
        let hovered: Vec<_> = frame
            .handles
            .iter()
            .filter(|h| h.state == HandleState::Hovered)
            .collect();
        assert_eq!(hovered.len(), 1);
        assert_eq!(
            hovered[0].target,
            HandleTarget::Polygon { polygon: 0, vertex: 1 }
        );
        assert_eq!(frame.cursor, CursorIcon::Grab);
    }

    #[test]
    fn test_cursor_affordance_precedence() {
        let mut editor = Editor::new();
        assert_eq!(cursor_icon(&editor), CursorIcon::Default);

        editor.place_vertex(Point::new(0.0, 0.0));
        assert_eq!(cursor_icon(&editor), CursorIcon::Crosshair);

        editor.update_hover(Point::new(1.0, 1.0));
        assert_eq!(cursor_icon(&editor), CursorIcon::Grab);

        assert!(editor.begin_drag(Point::new(1.0, 1.0)));
        assert_eq!(cursor_icon(&editor), CursorIcon::Grabbing);
    }
}
