//! Synthesis of idealized primitives as point sequences.

use crate::draw::Point;
use crate::util::{angle_between, centroid, distance, lerp};
use std::f64::consts::TAU;

/// Interpolation steps per straight edge.
pub const EDGE_STEPS: usize = 15;
/// Parametric steps around a circle or ellipse.
pub const ROUND_STEPS: usize = 60;
/// Allowed deviation (degrees) from 90° for each rectangle corner.
pub const RIGHT_ANGLE_TOLERANCE: f64 = 40.0;
/// Side ratio under which a rectangle snaps to a square.
pub const SQUARE_RATIO: f64 = 1.2;

/// A straight segment from `start` to `end`, `EDGE_STEPS` steps, both ends included.
pub fn line(start: (f64, f64), end: (f64, f64), thickness: f64) -> Vec<Point> {
    (0..=EDGE_STEPS)
        .map(|i| {
            let (x, y) = lerp(start, end, i as f64 / EDGE_STEPS as f64);
            Point::new(x, y, thickness)
        })
        .collect()
}

/// A closed straight-sided polygon through `corners`, ending back on the first corner.
pub fn polygon(corners: &[(f64, f64)], thickness: f64) -> Vec<Point> {
    let n = corners.len();
    let mut points = Vec::with_capacity(n * EDGE_STEPS + 1);
    for k in 0..n {
        let from = corners[k];
        let to = corners[(k + 1) % n];
        for i in 0..EDGE_STEPS {
            let (x, y) = lerp(from, to, i as f64 / EDGE_STEPS as f64);
            points.push(Point::new(x, y, thickness));
        }
    }
    if let Some(&(x, y)) = corners.first() {
        points.push(Point::new(x, y, thickness));
    }
    points
}

/// A closed parametric ellipse, `ROUND_STEPS` steps, first point repeated at the end.
pub fn ellipse(center: (f64, f64), rx: f64, ry: f64, thickness: f64) -> Vec<Point> {
    (0..=ROUND_STEPS)
        .map(|i| {
            let theta = TAU * (i % ROUND_STEPS) as f64 / ROUND_STEPS as f64;
            Point::new(
                center.0 + rx * theta.cos(),
                center.1 + ry * theta.sin(),
                thickness,
            )
        })
        .collect()
}

/// True when every interior angle of the quadrilateral is within 90° ± tolerance.
pub fn is_rectangular(corners: &[(f64, f64); 4]) -> bool {
    (0..4).all(|k| {
        let prev = corners[(k + 3) % 4];
        let here = corners[k];
        let next = corners[(k + 1) % 4];
        let angle = angle_between(
            (prev.0 - here.0, prev.1 - here.1),
            (next.0 - here.0, next.1 - here.1),
        );
        (angle - 90.0).abs() <= RIGHT_ANGLE_TOLERANCE
    })
}

/// An ideal rectangle fitted to four rough corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectified {
    pub center: (f64, f64),
    pub width: f64,
    pub height: f64,
    /// Rotation in radians, taken from the first edge
    pub rotation: f64,
    pub corners: [(f64, f64); 4],
}

/// Fits a rotated rectangle to four corners given in drawing order.
///
/// Width averages edges 0-1 and 2-3, height averages 1-2 and 3-0. Sides within
/// [`SQUARE_RATIO`] of each other are forced to their mean.
pub fn rectify(corners: &[(f64, f64); 4]) -> Rectified {
    let center = centroid(corners).unwrap_or(corners[0]);
    let mut width = (distance(corners[0], corners[1]) + distance(corners[2], corners[3])) / 2.0;
    let mut height = (distance(corners[1], corners[2]) + distance(corners[3], corners[0])) / 2.0;
    let rotation = (corners[1].1 - corners[0].1).atan2(corners[1].0 - corners[0].0);

    let (long, short) = if width >= height {
        (width, height)
    } else {
        (height, width)
    };
    if short > 0.0 && long / short <= SQUARE_RATIO {
        let side = (width + height) / 2.0;
        width = side;
        height = side;
    }

    let (sin, cos) = rotation.sin_cos();
    let hw = width / 2.0;
    let hh = height / 2.0;
    let local = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];
    let rotated = local.map(|(x, y)| (center.0 + x * cos - y * sin, center.1 + x * sin + y * cos));

    Rectified {
        center,
        width,
        height,
        rotation,
        corners: rotated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_fixed_step_count() {
        let points = line((0.0, 0.0), (30.0, 0.0), 2.0);
        assert_eq!(points.len(), EDGE_STEPS + 1);
        assert_eq!(points[0].pos(), (0.0, 0.0));
        assert_eq!(points[EDGE_STEPS].pos(), (30.0, 0.0));
        assert!((points[1].x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn polygon_closes_on_first_corner() {
        let tri = [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)];
        let points = polygon(&tri, 1.0);
        assert_eq!(points.len(), 3 * EDGE_STEPS + 1);
        assert_eq!(points[0].pos(), points[points.len() - 1].pos());
        assert_eq!(points[EDGE_STEPS].pos(), (10.0, 0.0));
    }

    #[test]
    fn axis_aligned_rectangle_rectifies_exactly() {
        let corners = [(0.0, 0.0), (100.0, 0.0), (100.0, 60.0), (0.0, 60.0)];
        assert!(is_rectangular(&corners));

        let rect = rectify(&corners);
        assert!((rect.width - 100.0).abs() < 1e-9);
        assert!((rect.height - 60.0).abs() < 1e-9);
        assert!(rect.rotation.abs() < 1e-9);
        assert_eq!(rect.center, (50.0, 30.0));
        for (got, want) in rect.corners.iter().zip(corners.iter()) {
            assert!(distance(*got, *want) < 1e-9, "{got:?} != {want:?}");
        }
    }

    #[test]
    fn near_square_snaps_to_equal_sides() {
        let corners = [(0.0, 0.0), (100.0, 0.0), (100.0, 90.0), (0.0, 90.0)];
        let rect = rectify(&corners);
        assert!((rect.width - 95.0).abs() < 1e-9);
        assert!((rect.height - 95.0).abs() < 1e-9);
    }

    #[test]
    fn rotated_rectangle_keeps_rotation() {
        let angle: f64 = 30f64.to_radians();
        let (s, c) = angle.sin_cos();
        let rot = |x: f64, y: f64| (x * c - y * s, x * s + y * c);
        let corners = [rot(0.0, 0.0), rot(120.0, 0.0), rot(120.0, 50.0), rot(0.0, 50.0)];
        let rect = rectify(&corners);
        assert!((rect.rotation - angle).abs() < 1e-9);
        assert!((rect.width - 120.0).abs() < 1e-9);
        assert!((rect.height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn skewed_quad_fails_right_angle_test() {
        let corners = [(0.0, 0.0), (100.0, 0.0), (160.0, 40.0), (60.0, 40.0)];
        // Acute corners near 34° fall outside 90° ± 40°.
        assert!(!is_rectangular(&corners));
    }

    #[test]
    fn ellipse_is_closed_with_fixed_steps() {
        let points = ellipse((10.0, 10.0), 5.0, 3.0, 1.0);
        assert_eq!(points.len(), ROUND_STEPS + 1);
        assert_eq!(points[0].pos(), points[ROUND_STEPS].pos());
        assert!((points[0].x - 15.0).abs() < 1e-9);
    }
}
