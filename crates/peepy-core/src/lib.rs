//! Peepy Core Library
//!
//! Platform-agnostic engine for the Peepy annotation board: placed overlay
//! elements, the gestures that move/rotate/scale them, and freehand ink that
//! survives surface reinitialization.

pub mod board;
pub mod brush;
pub mod color;
pub mod config;
pub mod elements;
pub mod gesture;
pub mod input;
pub mod paint;
pub mod stickers;
pub mod stroke;
pub mod surface;
pub mod transform;

pub use board::{Board, Mode};
pub use brush::Brush;
pub use color::{parse_hex_color, ColorParseError, InkColor};
pub use config::{BoardConfig, ConfigError};
pub use elements::{ElementId, ElementKind, ElementPatch, ElementStore, OverlayElement};
pub use gesture::{ActionPolicy, GestureAction, GestureInterpreter, GestureSession};
pub use input::{BoardEvent, Modifiers, PointerEvent};
pub use paint::{PaintCommand, PaintSink, RecordingPainter};
pub use stickers::{MediaResult, MediaSearch, MediaSearchError, Sticker};
pub use stroke::{EmptyStrokePath, StrokePath, StrokeRecorder, StrokeStyle};
pub use surface::{DrawingSurface, SurfaceManager, SurfaceStyle};
