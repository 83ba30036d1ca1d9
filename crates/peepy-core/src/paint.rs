//! Paint-primitive interface driven during stroke capture and replay.

use crate::stroke::StrokeStyle;
use kurbo::{Cap, Join, Point, Size};

/// Receiver of paint primitives.
///
/// Implementations can draw into a 2D context, build a retained scene, or
/// just record the calls.
pub trait PaintSink {
    /// The surface was (re)allocated at `size`, discarding everything painted.
    fn clear(&mut self, size: Size);

    fn set_line_caps(&mut self, cap: Cap, join: Join);

    fn set_stroke_style(&mut self, style: &StrokeStyle);

    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Stroke the path built since the last `move_to`.
    fn stroke_segment(&mut self);
}

impl<P: PaintSink + ?Sized> PaintSink for &mut P {
    fn clear(&mut self, size: Size) {
        (**self).clear(size);
    }

    fn set_line_caps(&mut self, cap: Cap, join: Join) {
        (**self).set_line_caps(cap, join);
    }

    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        (**self).set_stroke_style(style);
    }

    fn move_to(&mut self, point: Point) {
        (**self).move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }

    fn stroke_segment(&mut self) {
        (**self).stroke_segment();
    }
}

/// One recorded paint primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Clear(Size),
    SetLineCaps(Cap, Join),
    SetStrokeStyle(StrokeStyle),
    MoveTo(Point),
    LineTo(Point),
    StrokeSegment,
}

/// A sink that records every primitive in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Hand back the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl PaintSink for RecordingPainter {
    fn clear(&mut self, size: Size) {
        self.commands.push(PaintCommand::Clear(size));
    }

    fn set_line_caps(&mut self, cap: Cap, join: Join) {
        self.commands.push(PaintCommand::SetLineCaps(cap, join));
    }

    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        self.commands.push(PaintCommand::SetStrokeStyle(*style));
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(PaintCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(PaintCommand::LineTo(point));
    }

    fn stroke_segment(&mut self) {
        self.commands.push(PaintCommand::StrokeSegment);
    }
}
