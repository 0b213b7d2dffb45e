//! Point and path records shared by the smoother, the editor and the recognizer.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// One pointer sample on a path.
///
/// `control_point1`/`control_point2` belong to the cubic Bézier segment that
/// *ends* at this point: the renderer draws `previous -> self` with
/// `cubic_to(control_point1, control_point2, self)`. They are derived data and
/// are recomputed whenever neighboring points change. The first point of a
/// path never carries control points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Stroke width at this sample in pixels
    pub thickness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_point1: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_point2: Option<(f64, f64)>,
}

impl Point {
    /// Creates a point without control points.
    pub fn new(x: f64, y: f64, thickness: f64) -> Self {
        Self {
            x,
            y,
            thickness,
            control_point1: None,
            control_point2: None,
        }
    }

    /// Returns the coordinate as an `(x, y)` tuple.
    pub fn pos(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Opaque path identifier, unique within one editor session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathId(pub u64);

/// A single stroke: one color and an ordered sequence of points.
///
/// Point order is the drawing order and defines the curve direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub id: PathId,
    pub color: Color,
    pub points: Vec<Point>,
}

impl Path {
    /// Creates an empty path.
    pub fn new(id: PathId, color: Color) -> Self {
        Self {
            id,
            color,
            points: Vec::new(),
        }
    }

    /// Mean thickness over all points, or `None` for an empty path.
    pub fn mean_thickness(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|p| p.thickness).sum();
        Some(sum / self.points.len() as f64)
    }
}
