//! Board: the single session context tying overlays, gestures and ink together.

use crate::brush::Brush;
use crate::color::InkColor;
use crate::config::BoardConfig;
use crate::elements::{ElementId, ElementKind, ElementStore, OverlayElement};
use crate::gesture::GestureInterpreter;
use crate::input::{BoardEvent, Modifiers, PointerEvent};
use crate::paint::PaintSink;
use crate::stickers::{find_sticker, Sticker};
use crate::stroke::StrokeRecorder;
use crate::surface::{SurfaceManager, SurfaceStyle};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// What the pointer does on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pointer manipulates overlay elements.
    #[default]
    Idle,
    /// Pointer draws freehand ink.
    Drawing,
}

/// Runtime state of one annotation session.
///
/// All mutation happens through `&mut self`, one event at a time.
#[derive(Debug)]
pub struct Board<P: PaintSink> {
    config: BoardConfig,
    elements: ElementStore,
    gestures: GestureInterpreter,
    strokes: StrokeRecorder,
    surface: SurfaceManager,
    brush: Brush,
    mode: Mode,
    painter: P,
}

impl<P: PaintSink> Board<P> {
    /// Create a board and initialize `painter` to an empty surface.
    pub fn new(config: BoardConfig, painter: P) -> Self {
        let brush = Brush::new(config.brush_color, config.brush_width());
        let surface = SurfaceManager::new(config.surface_size(), SurfaceStyle::round(brush.stroke_style()));
        let mut board = Self {
            mode: config.initial_mode,
            config,
            elements: ElementStore::new(),
            gestures: GestureInterpreter::new(),
            strokes: StrokeRecorder::new(),
            surface,
            brush,
            painter,
        };
        let size = board.surface.surface().size;
        board.resize_surface(size);
        board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn elements(&self) -> &ElementStore {
        &self.elements
    }

    pub fn gestures(&self) -> &GestureInterpreter {
        &self.gestures
    }

    pub fn strokes(&self) -> &StrokeRecorder {
        &self.strokes
    }

    pub fn surface(&self) -> &SurfaceManager {
        &self.surface
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    pub fn into_painter(self) -> P {
        self.painter
    }

    // --- modes ---

    /// Switch mode, ending whatever the pointer was doing in the old one.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.release_pointer();
        log::info!("Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    pub fn toggle_drawing_mode(&mut self) -> Mode {
        let next = match self.mode {
            Mode::Idle => Mode::Drawing,
            Mode::Drawing => Mode::Idle,
        };
        self.set_mode(next);
        next
    }

    // --- pointer ---

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                modifiers,
                target,
            } => self.pointer_down(position, modifiers, target),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up | PointerEvent::Leave => self.release_pointer(),
        }
    }

    pub fn pointer_down(&mut self, position: Point, modifiers: Modifiers, target: Option<ElementId>) {
        match self.mode {
            Mode::Drawing => {
                let style = self.brush.stroke_style();
                self.strokes.begin_stroke(position, style, &mut self.painter);
            }
            Mode::Idle => {
                let Some(id) = target else {
                    return;
                };
                match self.elements.get(id) {
                    Some(element) => {
                        self.gestures.begin(position, element, modifiers);
                    }
                    None => log::warn!("Pointer down on unknown element {}", id),
                }
            }
        }
    }

    pub fn pointer_move(&mut self, position: Point) {
        match self.mode {
            Mode::Drawing => self.strokes.extend_stroke(position, &mut self.painter),
            Mode::Idle => {
                self.gestures.update(position, &mut self.elements);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.release_pointer();
    }

    pub fn pointer_leave(&mut self) {
        self.release_pointer();
    }

    fn release_pointer(&mut self) {
        self.gestures.end();
        self.strokes.commit_stroke();
    }

    // --- placement ---

    /// Place submitted text. Blank text is ignored.
    pub fn commit_text_element(&mut self, content: &str, position: Option<Point>) -> Option<ElementId> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let position = position.unwrap_or(self.config.placement);
        Some(self.place(ElementKind::Text, content, position))
    }

    pub fn place_sticker(&mut self, sticker: &Sticker) -> ElementId {
        let position = self.config.placement;
        self.place(sticker.kind, &sticker.content, position)
    }

    /// Place a media search pick (an image or animated image URL).
    pub fn place_media(&mut self, kind: ElementKind, url: &str) -> ElementId {
        let position = self.config.placement;
        self.place(kind, url, position)
    }

    fn place(&mut self, kind: ElementKind, content: &str, position: Point) -> ElementId {
        let id = self.elements.add(kind, content, position).id();
        log::info!("Placed {:?} {} at ({}, {})", kind, id, position.x, position.y);
        id
    }

    /// Snapshot of placed elements in z-order.
    pub fn list(&self) -> Vec<OverlayElement> {
        self.elements.list()
    }

    // --- surface ---

    /// Resize the surface. Non-finite or non-positive dimensions are ignored.
    pub fn resize(&mut self, width: f64, height: f64) {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            log::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.resize_surface(Size::new(width, height));
    }

    fn resize_surface(&mut self, size: Size) {
        self.surface.resize(size, &self.strokes, &mut self.painter);
    }

    pub fn set_brush_color(&mut self, color: InkColor) {
        self.brush.set_color(color);
        self.restyle_surface();
    }

    pub fn set_brush_width(&mut self, width: f64) {
        self.brush.set_width(width);
        self.restyle_surface();
    }

    pub fn toggle_eraser(&mut self) -> bool {
        let on = self.brush.toggle_eraser();
        self.restyle_surface();
        on
    }

    fn restyle_surface(&mut self) {
        let style = SurfaceStyle::round(self.brush.stroke_style());
        self.surface.set_style(style, &self.strokes, &mut self.painter);
    }

    // --- scripted events ---

    pub fn handle_event(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::Pointer(pointer) => self.handle_pointer(pointer),
            BoardEvent::CommitText { content, position } => {
                self.commit_text_element(&content, position);
            }
            BoardEvent::PlaceSticker { name } => match find_sticker(&name) {
                Some(sticker) => {
                    self.place_sticker(&sticker);
                }
                None => log::warn!("Unknown sticker '{}'", name),
            },
            BoardEvent::PlaceMedia { kind, url } => {
                self.place_media(kind, &url);
            }
            BoardEvent::SetMode { mode } => self.set_mode(mode),
            BoardEvent::ToggleDrawing => {
                self.toggle_drawing_mode();
            }
            BoardEvent::Resize { width, height } => self.resize(width, height),
            BoardEvent::SetBrushColor { color } => self.set_brush_color(color),
            BoardEvent::SetBrushWidth { width } => self.set_brush_width(width),
            BoardEvent::ToggleEraser => {
                self.toggle_eraser();
            }
        }
    }
}
