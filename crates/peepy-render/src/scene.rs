//! Retained ink scene built from paint primitives.

use kurbo::{BezPath, Cap, Join, Point, Rect, Shape, Size, Stroke};
use peepy_core::paint::PaintSink;
use peepy_core::stroke::StrokeStyle;
use peniko::Color;

/// One stroked path in the scene.
#[derive(Debug, Clone)]
pub struct SceneStroke {
    pub path: BezPath,
    pub stroke: Stroke,
    pub color: Color,
}

/// Paint sink that keeps every stroked segment as a kurbo path.
///
/// A GPU or 2D backend renders the scene by stroking each entry in order.
#[derive(Debug, Clone)]
pub struct InkScene {
    size: Size,
    strokes: Vec<SceneStroke>,
    current: Option<BezPath>,
    cap: Cap,
    join: Join,
    width: f64,
    color: Color,
}

impl Default for InkScene {
    fn default() -> Self {
        Self::new()
    }
}

impl InkScene {
    pub fn new() -> Self {
        Self {
            size: Size::ZERO,
            strokes: Vec::new(),
            current: None,
            cap: Cap::Round,
            join: Join::Round,
            width: 1.0,
            color: Color::from_rgba8(0, 0, 0, 255),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn strokes(&self) -> &[SceneStroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Union of the stroked paths' bounding boxes, widened by half the line width.
    pub fn bounds(&self) -> Option<Rect> {
        self.strokes
            .iter()
            .map(|s| {
                let half = s.stroke.width / 2.0;
                s.path.bounding_box().inflate(half, half)
            })
            .reduce(|a, b| a.union(b))
    }

    fn current_stroke(&self) -> Stroke {
        Stroke::new(self.width)
            .with_caps(self.cap)
            .with_join(self.join)
    }
}

impl PaintSink for InkScene {
    fn clear(&mut self, size: Size) {
        log::debug!("Clearing ink scene ({} strokes dropped)", self.strokes.len());
        self.size = size;
        self.strokes.clear();
        self.current = None;
    }

    fn set_line_caps(&mut self, cap: Cap, join: Join) {
        self.cap = cap;
        self.join = join;
    }

    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        self.width = style.width;
        self.color = style.color.into();
    }

    fn move_to(&mut self, point: Point) {
        self.current.get_or_insert_with(BezPath::new).move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        match self.current.as_mut() {
            Some(path) if !path.elements().is_empty() => path.line_to(point),
            // Like a 2D context: a line with no current point starts one.
            _ => self.move_to(point),
        }
    }

    fn stroke_segment(&mut self) {
        let Some(path) = self.current.take() else {
            return;
        };
        if path.elements().is_empty() {
            return;
        }
        let stroke = self.current_stroke();
        self.strokes.push(SceneStroke {
            path,
            stroke,
            color: self.color,
        });
    }
}
