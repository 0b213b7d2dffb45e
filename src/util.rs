//! Utility functions for colors and planar geometry.
//!
//! This module provides:
//! - Color name mapping for the configuration file
//! - Distance, projection and angle helpers on `(x, y)` tuples
//! - Centroid and bounding-box helpers used by the recognizer

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
pub fn lerp(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

/// Distance from `p` to the segment `a`-`b` using the clamped projection.
///
/// Zero-length segments degrade to the point distance to `a`.
pub fn point_segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let abx = b.0 - a.0;
    let aby = b.1 - a.1;
    let ab2 = abx * abx + aby * aby;

    if ab2 < 1e-12 {
        return distance(p, a);
    }

    let t = (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / ab2).clamp(0.0, 1.0);
    distance(p, (a.0 + t * abx, a.1 + t * aby))
}

/// Unsigned angle in degrees between vectors `u` and `v` via `atan2(cross, dot)`.
///
/// Returns 0.0 when either vector has zero length.
pub fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let cross = u.0 * v.1 - u.1 * v.0;
    let dot = u.0 * v.0 + u.1 * v.1;
    cross.atan2(dot).abs().to_degrees()
}

/// Interior angle in degrees at `vertex` formed with `prev` and `next`.
///
/// Degenerate arms (a neighbor coinciding with the vertex) read as a straight
/// 180° so they never register as corners.
pub fn turn_angle(prev: (f64, f64), vertex: (f64, f64), next: (f64, f64)) -> f64 {
    let u = (prev.0 - vertex.0, prev.1 - vertex.1);
    let v = (next.0 - vertex.0, next.1 - vertex.1);
    if u.0.hypot(u.1) < 1e-9 || v.0.hypot(v.1) < 1e-9 {
        return 180.0;
    }
    angle_between(u, v)
}

/// Cumulative Euclidean length of a polyline.
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Arithmetic mean of a point set, or `None` when empty.
pub fn centroid(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    Some((sx / n, sy / n))
}

/// Axis-aligned bounds of a floating-point point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Computes the bounds of `points`, or `None` when empty.
    pub fn of(points: &[(f64, f64)]) -> Option<Self> {
        let (&(x0, y0), rest) = points.split_first()?;
        let mut bounds = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for &(x, y) in rest {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
