//! Unified pointer event types delivered by the input collaborator.
//!
//! Positions are already translated into drawing-surface coordinates;
//! surface sizing and event-listener wiring stay on the collaborator's side.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button: grabs handles and closes chains.
    Left,
    /// Secondary button: places vertices.
    Right,
    Middle,
}

/// A discrete pointer event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

impl PointerEvent {
    /// The surface position the event occurred at.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(PointerEvent::Move { position: p }.position(), p);
        assert_eq!(
            PointerEvent::Down { position: p, button: MouseButton::Left }.position(),
            p
        );
    }

    #[test]
    fn test_event_json_round_trip() {
        let event = PointerEvent::Down {
            position: Point::new(1.5, -2.0),
            button: MouseButton::Right,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PointerEvent = serde_json::from_str(&json).unwrap();
        match back {
            PointerEvent::Down { position, button } => {
                assert_eq!(position, Point::new(1.5, -2.0));
                assert_eq!(button, MouseButton::Right);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
