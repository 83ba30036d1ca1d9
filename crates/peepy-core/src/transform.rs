//! Transform math for move, rotate and scale gestures.
//!
//! Everything here is a pure function of its arguments.

use kurbo::{Point, Size, Vec2};

/// Smallest scale an element can have.
pub const MIN_SCALE: f64 = 0.1;
/// Largest scale an element can have.
pub const MAX_SCALE: f64 = 3.0;
/// Bounding box assumed for elements whose real size is unknown.
pub const DEFAULT_ELEMENT_SIZE: Size = Size::new(100.0, 100.0);
/// Offset subtracted from the pointer when moving: half the default size.
///
/// Applied regardless of the element's own bounding box.
pub const MOVE_ANCHOR_OFFSET: Vec2 = Vec2::new(50.0, 50.0);

/// Angle in radians of `point` as seen from `center`.
pub fn angle(center: Point, point: Point) -> f64 {
    (point - center).atan2()
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Clamp a scale factor into `[MIN_SCALE, MAX_SCALE]`. NaN maps to 1.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// New top-left position for a move gesture: recentred under the pointer.
pub fn move_position(pointer: Point) -> Point {
    pointer - MOVE_ANCHOR_OFFSET
}

/// New rotation for a rotate gesture.
///
/// Adds the angle swept since `start_angle` onto `previous_degrees`. The start
/// angle stays fixed for the whole gesture, so every call re-adds the full
/// sweep on top of whatever rotation is currently stored.
pub fn rotate(previous_degrees: f64, center: Point, pointer: Point, start_angle: f64) -> f64 {
    let delta = (angle(center, pointer) - start_angle).to_degrees();
    previous_degrees + delta
}

/// New scale for a scale gesture: ratio of current to starting distance.
///
/// A zero starting distance has no meaningful ratio and yields `None`; the
/// element keeps whatever scale it has.
pub fn scale(center: Point, pointer: Point, start_distance: f64) -> Option<f64> {
    if start_distance == 0.0 {
        return None;
    }
    let ratio = distance(center, pointer) / start_distance;
    ratio.is_finite().then(|| clamp_scale(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_move_subtracts_fixed_offset() {
        let position = move_position(Point::new(300.0, 250.0));
        assert!((position.x - 250.0).abs() < EPS);
        assert!((position.y - 200.0).abs() < EPS);
    }

    #[test]
    fn test_angle_and_distance() {
        let center = Point::new(100.0, 100.0);
        assert!(angle(center, Point::new(150.0, 100.0)).abs() < EPS);
        assert!((angle(center, Point::new(100.0, 150.0)) - FRAC_PI_2).abs() < EPS);
        assert!((distance(center, Point::new(103.0, 104.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let center = Point::new(250.0, 250.0);
        let start = angle(center, Point::new(300.0, 250.0));
        let rotation = rotate(0.0, center, Point::new(250.0, 300.0), start);
        assert!((rotation - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_accumulates_from_fixed_start() {
        let center = Point::ZERO;
        let start = angle(center, Point::new(10.0, 0.0));
        let pointer = Point::new(0.0, 10.0);

        let first = rotate(0.0, center, pointer, start);
        let second = rotate(first, center, pointer, start);
        assert!((first - 90.0).abs() < 1e-6);
        assert!((second - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_is_not_normalized() {
        let center = Point::ZERO;
        let start = angle(center, Point::new(10.0, 0.0));
        let rotation = rotate(350.0, center, Point::new(0.0, 10.0), start);
        assert!((rotation - 440.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_ratio() {
        let center = Point::new(0.0, 0.0);
        assert_eq!(scale(center, Point::new(100.0, 0.0), 50.0), Some(2.0));
        assert_eq!(scale(center, Point::new(25.0, 0.0), 50.0), Some(0.5));
    }

    #[test]
    fn test_scale_clamped() {
        let center = Point::ZERO;
        assert_eq!(scale(center, Point::new(1000.0, 0.0), 10.0), Some(MAX_SCALE));
        assert_eq!(scale(center, Point::new(0.1, 0.0), 10.0), Some(MIN_SCALE));
        assert_eq!(scale(center, center, 10.0), Some(MIN_SCALE));
    }

    #[test]
    fn test_scale_zero_start_distance_has_no_ratio() {
        let center = Point::new(5.0, 5.0);
        assert_eq!(scale(center, Point::new(50.0, 5.0), 0.0), None);
        assert_eq!(scale(center, center, 0.0), None);
        assert_eq!(scale(center, Point::new(f64::INFINITY, 5.0), 1.0), None);
    }

    #[test]
    fn test_clamp_scale_nan() {
        assert!((clamp_scale(f64::NAN) - 1.0).abs() < EPS);
        assert!((clamp_scale(f64::INFINITY) - MAX_SCALE).abs() < EPS);
    }
}
