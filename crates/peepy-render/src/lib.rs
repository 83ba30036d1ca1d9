//! Peepy Render Library
//!
//! Presentation helpers driven by the core: a retained ink scene that
//! implements the paint-primitive interface, and overlay layout turning
//! placed elements into transformed display nodes.

mod overlay;
mod scene;

pub use overlay::{display_rotation, layout_overlays, overlay_transform, OverlayNode};
pub use scene::{InkScene, SceneStroke};
