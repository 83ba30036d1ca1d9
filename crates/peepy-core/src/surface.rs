//! Drawing surface dimensions and style, and its reinitialization.
//!
//! Reallocating the surface wipes everything painted on it. Every trigger
//! (resize or style change) therefore goes through [`SurfaceManager::reinit`],
//! which always replays the committed stroke history afterwards.

use crate::paint::PaintSink;
use crate::stroke::{StrokeRecorder, StrokeStyle};
use kurbo::{Cap, Join, Size};

/// Full paint style of the surface context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub stroke: StrokeStyle,
    pub cap: Cap,
    pub join: Join,
}

impl SurfaceStyle {
    /// Round caps and joins, as freehand ink is drawn.
    pub fn round(stroke: StrokeStyle) -> Self {
        Self {
            stroke,
            cap: Cap::Round,
            join: Join::Round,
        }
    }
}

/// The paintable canvas: its size and current paint style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingSurface {
    pub size: Size,
    pub style: SurfaceStyle,
}

/// Owns the [`DrawingSurface`] and keeps painted ink across reinitialization.
#[derive(Debug, Clone)]
pub struct SurfaceManager {
    surface: DrawingSurface,
    reinit_count: u64,
}

impl SurfaceManager {
    /// A manager for a surface that has not been painted yet.
    ///
    /// Call [`reinit`](Self::reinit) once to bring a painter in sync.
    pub fn new(size: Size, style: SurfaceStyle) -> Self {
        Self {
            surface: DrawingSurface { size, style },
            reinit_count: 0,
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    /// How many times the surface has been reinitialized.
    pub fn reinit_count(&self) -> u64 {
        self.reinit_count
    }

    /// Reallocate the surface, reapply the style and replay all strokes.
    pub fn reinit(
        &mut self,
        size: Size,
        style: SurfaceStyle,
        strokes: &StrokeRecorder,
        painter: &mut impl PaintSink,
    ) {
        self.surface = DrawingSurface { size, style };
        self.reinit_count += 1;
        log::info!(
            "Reinitializing surface at {}x{} (replaying {} strokes)",
            size.width,
            size.height,
            strokes.history().len()
        );

        painter.clear(size);
        painter.set_line_caps(style.cap, style.join);
        painter.set_stroke_style(&style.stroke);
        strokes.replay_all(painter);
        // Replay leaves the last path's style on the context.
        painter.set_stroke_style(&style.stroke);
    }

    /// Viewport resized: reinit at the new size with the current style.
    pub fn resize(&mut self, size: Size, strokes: &StrokeRecorder, painter: &mut impl PaintSink) {
        let style = self.surface.style;
        self.reinit(size, style, strokes, painter);
    }

    /// Brush color or width changed: reinit at the current size.
    pub fn set_style(&mut self, style: SurfaceStyle, strokes: &StrokeRecorder, painter: &mut impl PaintSink) {
        let size = self.surface.size;
        self.reinit(size, style, strokes, painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::InkColor;
    use crate::paint::{PaintCommand, RecordingPainter};
    use kurbo::Point;

    fn blue() -> StrokeStyle {
        StrokeStyle::new(InkColor::rgb(0x34, 0x98, 0xdb), 5.0)
    }

    fn recorder_with_one_stroke(style: StrokeStyle) -> StrokeRecorder {
        let mut recorder = StrokeRecorder::new();
        let mut scratch = RecordingPainter::new();
        recorder.begin_stroke(Point::new(0.0, 0.0), style, &mut scratch);
        recorder.extend_stroke(Point::new(4.0, 4.0), &mut scratch);
        recorder.commit_stroke();
        recorder
    }

    #[test]
    fn test_reinit_sequence() {
        let ink = StrokeStyle::new(InkColor::rgb(255, 0, 0), 2.0);
        let strokes = recorder_with_one_stroke(ink);
        let mut manager = SurfaceManager::new(Size::new(100.0, 100.0), SurfaceStyle::round(blue()));
        let mut painter = RecordingPainter::new();

        manager.reinit(
            Size::new(640.0, 480.0),
            SurfaceStyle::round(blue()),
            &strokes,
            &mut painter,
        );

        assert_eq!(
            painter.commands(),
            &[
                PaintCommand::Clear(Size::new(640.0, 480.0)),
                PaintCommand::SetLineCaps(Cap::Round, Join::Round),
                PaintCommand::SetStrokeStyle(blue()),
                PaintCommand::SetStrokeStyle(ink),
                PaintCommand::MoveTo(Point::new(0.0, 0.0)),
                PaintCommand::LineTo(Point::new(4.0, 4.0)),
                PaintCommand::StrokeSegment,
                PaintCommand::SetStrokeStyle(blue()),
            ]
        );
        assert_eq!(manager.surface().size, Size::new(640.0, 480.0));
        assert_eq!(manager.reinit_count(), 1);
    }

    #[test]
    fn test_resize_replays_history() {
        let ink = StrokeStyle::new(InkColor::black(), 1.0);
        let strokes = recorder_with_one_stroke(ink);
        let mut manager = SurfaceManager::new(Size::new(100.0, 100.0), SurfaceStyle::round(blue()));
        let mut painter = RecordingPainter::new();

        manager.resize(Size::new(50.0, 60.0), &strokes, &mut painter);

        assert!(painter.commands().contains(&PaintCommand::SetStrokeStyle(ink)));
        assert_eq!(manager.surface().style.stroke, blue());
        assert_eq!(manager.surface().size, Size::new(50.0, 60.0));
    }

    #[test]
    fn test_style_change_replays_history() {
        let ink = StrokeStyle::new(InkColor::black(), 1.0);
        let strokes = recorder_with_one_stroke(ink);
        let mut manager = SurfaceManager::new(Size::new(100.0, 100.0), SurfaceStyle::round(blue()));
        let mut painter = RecordingPainter::new();
        let thick = StrokeStyle::new(InkColor::white(), 20.0);

        manager.set_style(SurfaceStyle::round(thick), &strokes, &mut painter);

        let commands = painter.commands();
        assert_eq!(commands[0], PaintCommand::Clear(Size::new(100.0, 100.0)));
        assert!(commands.contains(&PaintCommand::SetStrokeStyle(ink)));
        assert_eq!(commands.last(), Some(&PaintCommand::SetStrokeStyle(thick)));
        assert_eq!(manager.surface().style.stroke, thick);
    }

    #[test]
    fn test_reinit_without_history() {
        let strokes = StrokeRecorder::new();
        let mut manager = SurfaceManager::new(Size::new(10.0, 10.0), SurfaceStyle::round(blue()));
        let mut painter = RecordingPainter::new();

        manager.resize(Size::new(20.0, 20.0), &strokes, &mut painter);

        assert_eq!(painter.len(), 4);
        assert!(!painter.commands().contains(&PaintCommand::StrokeSegment));
    }
}
