//! Geometric primitives: the bounding envelope and angular measures used to
//! order half edges around a vertex.

use cgmath::{InnerSpace, Point2, Rad, Vector2};


/// An axis-aligned bounding rectangle.
///
/// Every coordinate handed to a [`crate::SubdivisionBuilder`] is expected to
/// lie within the envelope the builder was created with. The envelope is not
/// enforced per insertion; it is carried through to the finished
/// [`crate::Subdivision`] as metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    min: Point2<f64>,
    max: Point2<f64>,
}

impl Envelope {
    /// Creates an envelope from its lower-left and upper-right corners.
    ///
    /// Panics if `min` exceeds `max` in either coordinate.
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        assert!(
            min.x <= max.x && min.y <= max.y,
            "envelope corners out of order: min {:?}, max {:?}",
            min,
            max,
        );

        Self { min, max }
    }

    /// The lower-left corner.
    pub fn min(&self) -> Point2<f64> {
        self.min
    }

    /// The upper-right corner.
    pub fn max(&self) -> Point2<f64> {
        self.max
    }

    /// Returns `true` if `p` lies within the envelope (borders included).
    pub fn contains(&self, p: Point2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}


/// The direction in which `curve` leaves its first point.
///
/// Only the first segment matters: interior points of the curve never meet
/// another edge, so the rotation order at the start vertex is fully
/// determined by it.
pub(crate) fn direction_from_start(curve: &[Point2<f64>]) -> Vector2<f64> {
    debug_assert!(curve.len() >= 2);
    curve[1] - curve[0]
}

/// The direction in which `curve` leaves its last point (i.e. pointing
/// backwards into the curve).
pub(crate) fn direction_from_end(curve: &[Point2<f64>]) -> Vector2<f64> {
    debug_assert!(curve.len() >= 2);
    curve[curve.len() - 2] - curve[curve.len() - 1]
}

/// The clockwise angle from `from` to `to`, in the half-open range (0, 2π].
///
/// An exact angle of 0 is mapped to 2π: when rotating clockwise away from
/// `from`, a codirectional vector is the *last* one encountered, not the
/// first. This is what makes a half edge's own twin sort behind every other
/// edge leaving the shared vertex.
pub(crate) fn cw_angle(from: Vector2<f64>, to: Vector2<f64>) -> Rad<f64> {
    use std::f64::consts::PI;

    // `Vector2::angle` is the signed CCW angle in (-π, π].
    let ccw = from.angle(to);
    let cw = (-ccw.0).rem_euclid(2.0 * PI);
    if cw == 0.0 {
        Rad(2.0 * PI)
    } else {
        Rad(cw)
    }
}


#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    const EAST: Vector2<f64> = Vector2 { x: 1.0, y: 0.0 };
    const NORTH: Vector2<f64> = Vector2 { x: 0.0, y: 1.0 };
    const WEST: Vector2<f64> = Vector2 { x: -1.0, y: 0.0 };
    const SOUTH: Vector2<f64> = Vector2 { x: 0.0, y: -1.0 };

    fn assert_angle(actual: Rad<f64>, expected: f64) {
        assert!(
            (actual.0 - expected).abs() < 1e-12,
            "expected {} rad, got {} rad",
            expected,
            actual.0,
        );
    }

    #[test]
    fn cw_angle_quarter_turns() {
        assert_angle(cw_angle(EAST, SOUTH), PI / 2.0);
        assert_angle(cw_angle(EAST, WEST), PI);
        assert_angle(cw_angle(EAST, NORTH), 3.0 * PI / 2.0);
        assert_angle(cw_angle(NORTH, EAST), PI / 2.0);
    }

    #[test]
    fn cw_angle_codirectional_is_full_turn() {
        assert_angle(cw_angle(EAST, EAST), 2.0 * PI);
        assert_angle(cw_angle(EAST, EAST * 5.0), 2.0 * PI);
    }

    #[test]
    fn curve_directions() {
        let curve = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 3.0),
        ];
        assert_eq!(direction_from_start(&curve), Vector2::new(1.0, 0.0));
        assert_eq!(direction_from_end(&curve), Vector2::new(0.0, -3.0));
    }

    #[test]
    fn envelope_contains() {
        let env = Envelope::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert!(env.contains(Point2::new(5.0, 5.0)));
        assert!(env.contains(Point2::new(0.0, 10.0)));
        assert!(!env.contains(Point2::new(-0.1, 5.0)));
        assert!(!env.contains(Point2::new(5.0, 10.1)));
    }

    #[test]
    #[should_panic]
    fn envelope_rejects_flipped_corners() {
        Envelope::new(Point2::new(1.0, 0.0), Point2::new(0.0, 1.0));
    }
}
