//! Overlay object store: placed elements, their identity and z-order.

use crate::transform::{clamp_scale, DEFAULT_ELEMENT_SIZE};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier of an overlay element.
///
/// Issued by [`ElementStore`] from a monotonically increasing counter, so
/// rapid insertions can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw id, e.g. one read back from an event script.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an overlay element shows. Only the presentation layer branches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Emoji,
    Image,
    AnimatedImage,
}

/// A placed, independently transformable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayElement {
    id: ElementId,
    kind: ElementKind,
    /// Literal text, emoji glyph or media URL.
    content: String,
    /// Top-left corner in surface coordinates.
    pub position: Point,
    /// Uniform scale, always within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
    /// Accumulated rotation. Not normalized.
    pub rotation_degrees: f64,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
}

impl OverlayElement {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center of the bounding box, the pivot for rotate and scale gestures.
    pub fn center(&self) -> Point {
        self.position + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Fields a gesture may change on an element. `None` leaves a field as is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Point>,
    pub rotation_degrees: Option<f64>,
    pub scale: Option<f64>,
}

impl ElementPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn rotation(degrees: f64) -> Self {
        Self {
            rotation_degrees: Some(degrees),
            ..Self::default()
        }
    }

    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation_degrees.is_none() && self.scale.is_none()
    }
}

/// Owns every placed element. Insertion order is z-order (back to front).
#[derive(Debug, Clone)]
pub struct ElementStore {
    elements: HashMap<ElementId, OverlayElement>,
    z_order: Vec<ElementId>,
    next_id: u64,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            z_order: Vec::new(),
            next_id: 1,
        }
    }

    fn issue_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Place a new element with the default 100×100 bounding box.
    pub fn add(&mut self, kind: ElementKind, content: impl Into<String>, position: Point) -> &OverlayElement {
        self.add_sized(kind, content, position, DEFAULT_ELEMENT_SIZE)
    }

    /// Place a new element whose bounding box is already known.
    ///
    /// Non-positive or non-finite dimensions fall back to the default size.
    pub fn add_sized(
        &mut self,
        kind: ElementKind,
        content: impl Into<String>,
        position: Point,
        size: Size,
    ) -> &OverlayElement {
        let sane = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let id = self.issue_id();
        let element = OverlayElement {
            id,
            kind,
            content: content.into(),
            position,
            scale: 1.0,
            rotation_degrees: 0.0,
            width: sane(size.width, DEFAULT_ELEMENT_SIZE.width),
            height: sane(size.height, DEFAULT_ELEMENT_SIZE.height),
        };
        log::debug!("Placed {:?} element {} at {:?}", kind, id, position);
        self.z_order.push(id);
        self.elements.entry(id).or_insert(element)
    }

    /// Snapshot of all elements in z-order.
    pub fn list(&self) -> Vec<OverlayElement> {
        self.iter().cloned().collect()
    }

    /// Elements in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &OverlayElement> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn get(&self, id: ElementId) -> Option<&OverlayElement> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Merge a patch into the element with `id`.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        let Some(element) = self.elements.get_mut(&id) else {
            log::warn!("Ignoring update for unknown element {}", id);
            return false;
        };
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(rotation) = patch.rotation_degrees {
            element.rotation_degrees = rotation;
        }
        if let Some(scale) = patch.scale {
            element.scale = clamp_scale(scale);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
