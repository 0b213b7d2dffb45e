//! Incremental cubic Bézier control points for freehand paths.
//!
//! Every segment `P2 -> P3` of a path is rendered as a cubic whose control
//! points come from the sliding window `P1, P2, P3, P4`. Missing neighbors at
//! the path ends are filled by duplicating the nearest endpoint. Control points
//! are stored on the point that ends the segment (see [`Point`]).
//!
//! Construction of control point 1: take the tangent at P2 (the line through
//! P2 with the slope of P1-P3) and intersect it with the line through the blend
//! point `lerp(P2, P3, s)` that has the slope of P1-P2. Control point 2 mirrors
//! this at P3 with the slopes of P2-P4 and P3-P4. Intersections are solved on
//! direction vectors, so vertical segments never divide by a zero run.

use crate::draw::Point;

/// Two slopes closer than this are treated as parallel (sharp corner).
pub const SLOPE_EPSILON: f64 = 0.001;

/// Default smoothness coefficient.
pub const DEFAULT_SMOOTHNESS: f64 = 0.1;

/// Valid smoothness range (inclusive).
pub const SMOOTHNESS_RANGE: (f64, f64) = (0.0, 1.0);

const VERTICAL_EPSILON: f64 = 1e-9;

/// Computes Bézier control points for freehand paths.
///
/// Stateless apart from the smoothness coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSmoother {
    smoothness: f64,
}

impl Default for CurveSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHNESS)
    }
}

impl CurveSmoother {
    /// Creates a smoother, clamping `smoothness` into [`SMOOTHNESS_RANGE`].
    pub fn new(smoothness: f64) -> Self {
        let smoothness = if smoothness.is_finite() {
            smoothness.clamp(SMOOTHNESS_RANGE.0, SMOOTHNESS_RANGE.1)
        } else {
            DEFAULT_SMOOTHNESS
        };
        Self { smoothness }
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// Control points for the segment `p2 -> p3` given its outer neighbors.
    pub fn control_points(
        &self,
        p1: (f64, f64),
        p2: (f64, f64),
        p3: (f64, f64),
        p4: (f64, f64),
    ) -> ((f64, f64), (f64, f64)) {
        (
            edge_control(p1, p2, p3, self.smoothness),
            edge_control(p4, p3, p2, self.smoothness),
        )
    }

    /// Recomputes the control points affected by the most recently appended point.
    ///
    /// Only the last two segments are touched, so incremental drawing costs
    /// O(1) per point. The result matches [`CurveSmoother::smooth_all`].
    pub fn smooth_tail(&self, points: &mut [Point]) {
        let n = points.len();
        if n < 2 {
            return;
        }
        if n == 2 {
            self.collapse_two_point(points);
            return;
        }
        for end in (n - 2).max(1)..n {
            self.apply_segment(points, end);
        }
    }

    /// Recomputes control points for every point of the path.
    pub fn smooth_all(&self, points: &mut [Point]) {
        if let Some(first) = points.first_mut() {
            first.control_point1 = None;
            first.control_point2 = None;
        }
        match points.len() {
            0 | 1 => {}
            2 => self.collapse_two_point(points),
            n => {
                for end in 1..n {
                    self.apply_segment(points, end);
                }
            }
        }
    }

    fn collapse_two_point(&self, points: &mut [Point]) {
        let p0 = points[0].pos();
        let p1 = points[1].pos();
        let cp = edge_control(p0, p0, p1, self.smoothness);
        points[1].control_point1 = Some(cp);
        points[1].control_point2 = Some(cp);
    }

    fn apply_segment(&self, points: &mut [Point], end: usize) {
        let p2 = points[end - 1].pos();
        let p3 = points[end].pos();
        let p1 = if end >= 2 { points[end - 2].pos() } else { p2 };
        let p4 = points.get(end + 1).map_or(p3, Point::pos);

        let (cp1, cp2) = self.control_points(p1, p2, p3, p4);
        points[end].control_point1 = Some(cp1);
        points[end].control_point2 = Some(cp2);
    }
}

/// Control point next to `b` on the segment `b -> c`, with `a` the outer neighbor of `b`.
///
/// Falls back to `b` itself (a sharp corner) whenever the two lines are parallel
/// or either direction is degenerate.
fn edge_control(a: (f64, f64), b: (f64, f64), c: (f64, f64), s: f64) -> (f64, f64) {
    // Tangent at b, parallel to a-c.
    let tangent = (c.0 - a.0, c.1 - a.1);
    // Incoming segment direction a-b.
    let incoming = (b.0 - a.0, b.1 - a.1);

    if is_degenerate(tangent) || is_degenerate(incoming) || nearly_parallel(tangent, incoming) {
        return b;
    }

    let blend = (b.0 + (c.0 - b.0) * s, b.1 + (c.1 - b.1) * s);
    let denom = cross(tangent, incoming);
    let t = cross((blend.0 - b.0, blend.1 - b.1), incoming) / denom;
    let cp = (b.0 + tangent.0 * t, b.1 + tangent.1 * t);

    if cp.0.is_finite() && cp.1.is_finite() {
        cp
    } else {
        b
    }
}

fn cross(u: (f64, f64), v: (f64, f64)) -> f64 {
    u.0 * v.1 - u.1 * v.0
}

fn is_degenerate(v: (f64, f64)) -> bool {
    v.0.hypot(v.1) < VERTICAL_EPSILON
}

fn nearly_parallel(u: (f64, f64), v: (f64, f64)) -> bool {
    let u_vertical = u.0.abs() < VERTICAL_EPSILON;
    let v_vertical = v.0.abs() < VERTICAL_EPSILON;
    let slopes_match = match (u_vertical, v_vertical) {
        (true, true) => true,
        (false, false) => (u.1 / u.0 - v.1 / v.0).abs() < SLOPE_EPSILON,
        _ => false,
    };
    // Steep lines have huge slopes; the normalized cross product still catches
    // them when they are parallel.
    slopes_match || cross(u, v).abs() <= VERTICAL_EPSILON * u.0.hypot(u.1) * v.0.hypot(v.1)
}
