//! Overlay layout: where and how each placed element is drawn.

use kurbo::{Affine, Rect, Shape, Vec2};
use peepy_core::elements::{ElementId, ElementKind, OverlayElement};

/// Rotation folded into `[0, 360)` for display.
pub fn display_rotation(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if folded >= 360.0 { 0.0 } else { folded }
}

/// Element-local to surface transform.
///
/// The element's box spans `(0, 0)..(width, height)` locally. It is scaled
/// and rotated about its own center, then placed at its position.
pub fn overlay_transform(element: &OverlayElement) -> Affine {
    let half = Vec2::new(element.width / 2.0, element.height / 2.0);
    Affine::translate(element.position.to_vec2() + half)
        * Affine::rotate(element.rotation_degrees.to_radians())
        * Affine::scale(element.scale)
        * Affine::translate(-half)
}

/// A positioned visual node for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode {
    pub id: ElementId,
    pub kind: ElementKind,
    pub content: String,
    pub transform: Affine,
    /// Rotation for display, in `[0, 360)`.
    pub rotation_degrees: f64,
    /// Axis-aligned bounds of the transformed box on the surface.
    pub bounds: Rect,
}

impl OverlayNode {
    pub fn from_element(element: &OverlayElement) -> Self {
        let transform = overlay_transform(element);
        let local = Rect::new(0.0, 0.0, element.width, element.height);
        Self {
            id: element.id(),
            kind: element.kind(),
            content: element.content().to_string(),
            transform,
            rotation_degrees: display_rotation(element.rotation_degrees),
            bounds: (transform * local.to_path(0.1)).bounding_box(),
        }
    }
}

/// Build display nodes back to front.
pub fn layout_overlays<'a>(elements: impl IntoIterator<Item = &'a OverlayElement>) -> Vec<OverlayNode> {
    elements.into_iter().map(OverlayNode::from_element).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use peepy_core::elements::{ElementPatch, ElementStore};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_display_rotation() {
        assert!((display_rotation(450.0) - 90.0).abs() < EPS);
        assert!((display_rotation(-90.0) - 270.0).abs() < EPS);
        assert!(display_rotation(720.0).abs() < EPS);
        assert!((display_rotation(359.5) - 359.5).abs() < EPS);
    }

    #[test]
    fn test_identity_transform_places_box() {
        let mut store = ElementStore::new();
        let element = store.add(ElementKind::Text, "hi", Point::new(200.0, 200.0)).clone();

        let transform = overlay_transform(&element);
        let origin = transform * Point::ZERO;
        assert!((origin.x - 200.0).abs() < EPS);
        assert!((origin.y - 200.0).abs() < EPS);
    }

    #[test]
    fn test_scale_keeps_center_fixed() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Emoji, "🌈", Point::new(0.0, 0.0)).id();
        store.update(id, ElementPatch::scale(2.0));
        let element = store.get(id).unwrap();

        let node = OverlayNode::from_element(element);
        let center = node.transform * Point::new(50.0, 50.0);
        assert!((center.x - 50.0).abs() < EPS);
        assert!((center.y - 50.0).abs() < EPS);
        assert!((node.bounds.width() - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Image, "/image.png", Point::ZERO).id();
        store.update(id, ElementPatch::rotation(450.0));

        let node = OverlayNode::from_element(store.get(id).unwrap());
        assert!((node.rotation_degrees - 90.0).abs() < EPS);

        // Top-left corner swings to the top-right around the center (50, 50).
        let corner = node.transform * Point::ZERO;
        assert!((corner.x - 100.0).abs() < 1e-6);
        assert!(corner.y.abs() < 1e-6);
    }

    #[test]
    fn test_layout_keeps_z_order() {
        let mut store = ElementStore::new();
        let a = store.add(ElementKind::Text, "a", Point::ZERO).id();
        let b = store.add(ElementKind::AnimatedImage, "/bee.gif", Point::ZERO).id();

        let nodes = layout_overlays(store.iter());
        let ids: Vec<ElementId> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
