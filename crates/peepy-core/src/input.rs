//! Input events consumed by the board.
//!
//! Events are abstracted away from any windowing API: the host translates its
//! native mouse/keyboard events into these before handing them to
//! [`Board`](crate::board::Board).

use crate::board::Mode;
use crate::color::InkColor;
use crate::elements::{ElementId, ElementKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state, sampled when a pointer goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }
}

/// Single-pointer event in surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        modifiers: Modifiers,
        /// Overlay element under the pointer, if the host hit one.
        #[serde(default)]
        target: Option<ElementId>,
    },
    Move {
        position: Point,
    },
    Up,
    /// Pointer left the interactive surface.
    Leave,
}

/// Any event a host (or a recorded script) can feed into a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    Pointer(PointerEvent),
    /// Text input submitted with Enter.
    CommitText {
        content: String,
        #[serde(default)]
        position: Option<Point>,
    },
    /// Pick from the built-in sticker catalog by name.
    PlaceSticker { name: String },
    /// Place an image or animated image returned by a media search.
    PlaceMedia { kind: ElementKind, url: String },
    SetMode { mode: Mode },
    ToggleDrawing,
    Resize { width: f64, height: f64 },
    SetBrushColor { color: InkColor },
    SetBrushWidth { width: f64 },
    ToggleEraser,
}

impl From<PointerEvent> for BoardEvent {
    fn from(event: PointerEvent) -> Self {
        BoardEvent::Pointer(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_constructors() {
        assert!(Modifiers::alt().alt);
        assert!(!Modifiers::alt().shift);
        assert!(Modifiers::shift().shift);
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn test_pointer_down_from_json() {
        let json = r#"{"event":"pointer","type":"down","position":{"x":10.0,"y":20.0},"modifiers":{"alt":true},"target":3}"#;
        let event: BoardEvent = serde_json::from_str(json).unwrap();

        match event {
            BoardEvent::Pointer(PointerEvent::Down {
                position,
                modifiers,
                target,
            }) => {
                assert_eq!(position, Point::new(10.0, 20.0));
                assert!(modifiers.alt);
                assert!(!modifiers.shift);
                assert_eq!(target, Some(ElementId::from_raw(3)));
            }
            other => panic!("Expected pointer down, got {:?}", other),
        }
    }

    #[test]
    fn test_script_events_from_json() {
        let json = r##"[
            {"event":"commit_text","content":"hi"},
            {"event":"set_brush_color","color":"#ff0000"},
            {"event":"resize","width":640.0,"height":480.0},
            {"event":"pointer","type":"up"},
            {"event":"toggle_eraser"}
        ]"##;
        let events: Vec<BoardEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            BoardEvent::CommitText {
                content: "hi".to_string(),
                position: None
            }
        );
        assert_eq!(
            events[1],
            BoardEvent::SetBrushColor {
                color: InkColor::rgb(255, 0, 0)
            }
        );
        assert_eq!(events[3], BoardEvent::Pointer(PointerEvent::Up));
    }
}
