//! Freehand ink capture and replay.

use crate::color::InkColor;
use crate::paint::PaintSink;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color and width a stroke is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: InkColor,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: InkColor, width: f64) -> Self {
        Self { color, width }
    }
}

/// A recorded freehand ink path with the style it was drawn in.
///
/// Always holds at least one point. Once committed to a recorder's history
/// it is never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStrokePath")]
pub struct StrokePath {
    points: Vec<Point>,
    style: StrokeStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stroke path has no points")]
pub struct EmptyStrokePath;

#[derive(Deserialize)]
struct RawStrokePath {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl TryFrom<RawStrokePath> for StrokePath {
    type Error = EmptyStrokePath;

    fn try_from(raw: RawStrokePath) -> Result<Self, Self::Error> {
        if raw.points.is_empty() {
            return Err(EmptyStrokePath);
        }
        Ok(Self {
            points: raw.points,
            style: raw.style,
        })
    }
}

impl StrokePath {
    fn start(point: Point, style: StrokeStyle) -> Self {
        Self {
            points: vec![point],
            style,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The path as move-to plus line-to elements.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        path
    }

    /// Emit the primitives reproducing this path in its own style.
    fn paint(&self, painter: &mut impl PaintSink) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        painter.set_stroke_style(&self.style);
        painter.move_to(*first);
        for point in rest {
            painter.line_to(*point);
        }
        painter.stroke_segment();
    }
}

/// Captures strokes while drawing and keeps the committed history.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    current: Option<StrokePath>,
    history: Vec<StrokePath>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new path at `point` and position the pen there.
    ///
    /// A stroke already in progress is committed first.
    pub fn begin_stroke(&mut self, point: Point, style: StrokeStyle, painter: &mut impl PaintSink) {
        if self.current.is_some() {
            log::debug!("Committing unfinished stroke before starting a new one");
            self.commit_stroke();
        }
        self.current = Some(StrokePath::start(point, style));
        painter.move_to(point);
    }

    /// Append `point` and paint the segment leading to it.
    pub fn extend_stroke(&mut self, point: Point, painter: &mut impl PaintSink) {
        let Some(path) = self.current.as_mut() else {
            return;
        };
        let Some(&previous) = path.points.last() else {
            return;
        };
        path.points.push(point);

        painter.set_stroke_style(&path.style);
        painter.move_to(previous);
        painter.line_to(point);
        painter.stroke_segment();
    }

    /// Freeze the in-progress path into the history.
    ///
    /// Returns `true` if a path was committed.
    pub fn commit_stroke(&mut self) -> bool {
        match self.current.take() {
            Some(path) if !path.is_empty() => {
                log::debug!("Committed stroke with {} points", path.len());
                self.history.push(path);
                true
            }
            _ => false,
        }
    }

    /// Repaint every committed path, oldest first, each in its own style.
    pub fn replay_all(&self, painter: &mut impl PaintSink) {
        for path in &self.history {
            path.paint(painter);
        }
    }

    pub fn history(&self) -> &[StrokePath] {
        &self.history
    }

    pub fn in_progress(&self) -> Option<&StrokePath> {
        self.current.as_ref()
    }

    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }
}
