//! Shape recognition for finished strokes.
//!
//! [`recognize`] classifies a completed point sequence as a line, triangle,
//! rectangle, quadrilateral, circle or oval and synthesizes an idealized
//! replacement. Rules are tried in order and the first match wins:
//!
//! 1. Line: the endpoints are almost as far apart as the stroke is long.
//! 2. Corners are detected on a 40-point arc-length resampling.
//! 3. Three corners: triangle, unless the stroke is round enough to be a circle.
//! 4. Four corners: rectangle when every corner is near 90°, else a quadrilateral.
//! 5. Five corners: the closest pair is merged and rule 4 is applied.
//! 6. Round enough, or a blob with a corner count outside 3..=5: circle or oval.
//!
//! The function is pure and deterministic; strokes under ten points are left
//! as freehand.

pub mod corners;
pub mod synth;

#[cfg(test)]
mod tests;

use crate::draw::Point;
use crate::util::{Bounds, centroid, distance, polyline_length};
use log::debug;
use serde::{Deserialize, Serialize};

/// Strokes with fewer points than this are never recognized.
pub const MIN_POINTS: usize = 10;
/// `direct / total` above this ratio classifies the stroke as a line.
pub const LINE_RATIO: f64 = 0.92;
/// Circularity CV below which a three-corner stroke is treated as round.
pub const TRIANGLE_ROUND_CV: f64 = 0.18;
/// Circularity CV below which any remaining stroke is treated as round.
pub const ROUND_CV: f64 = 0.20;
/// Bounding-box aspect ratio below which a round stroke is a circle.
pub const CIRCLE_ASPECT: f64 = 1.2;

/// The primitive a stroke was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Line,
    Triangle,
    Rectangle,
    Quadrilateral,
    Circle,
    Oval,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Quadrilateral => "quadrilateral",
            ShapeKind::Circle => "circle",
            ShapeKind::Oval => "oval",
        }
    }
}

/// Result of a successful recognition: the kind and its replacement points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedShape {
    pub kind: ShapeKind,
    pub points: Vec<Point>,
}

/// Classifies a finished stroke, returning an idealized replacement or `None`.
///
/// Every synthesized point carries `thickness` and no control points.
pub fn recognize(points: &[Point], thickness: f64) -> Option<RecognizedShape> {
    let coords: Vec<(f64, f64)> = points.iter().map(Point::pos).collect();
    let shape = recognize_coords(&coords, thickness);
    match &shape {
        Some(shape) => debug!(
            "Recognized {} from {} points",
            shape.kind.as_str(),
            points.len()
        ),
        None => debug!("No shape match for {} points", points.len()),
    }
    shape
}

fn recognize_coords(coords: &[(f64, f64)], thickness: f64) -> Option<RecognizedShape> {
    if coords.len() < MIN_POINTS {
        return None;
    }

    let total = polyline_length(coords);
    if total <= f64::EPSILON {
        return None;
    }

    let first = coords[0];
    let last = coords[coords.len() - 1];
    if distance(first, last) > LINE_RATIO * total {
        return Some(RecognizedShape {
            kind: ShapeKind::Line,
            points: synth::line(first, last, thickness),
        });
    }

    let samples = corners::resample(coords, corners::RESAMPLE_COUNT);
    let found = corners::detect_corners(&samples);
    debug!("Corner detection found {} corner(s)", found.len());

    match found.len() {
        3 => {
            if circularity_cv(coords) < TRIANGLE_ROUND_CV {
                return round_shape(coords, thickness);
            }
            return Some(RecognizedShape {
                kind: ShapeKind::Triangle,
                points: synth::polygon(&found, thickness),
            });
        }
        4 => return quadrilateral(&found, thickness),
        5 => {
            let merged = corners::merge_closest_pair(&found);
            if merged.len() == 4 {
                return quadrilateral(&merged, thickness);
            }
        }
        _ => {}
    }

    let blob = !(3..=5).contains(&found.len());
    if blob || circularity_cv(coords) < ROUND_CV {
        return round_shape(coords, thickness);
    }
    None
}

fn quadrilateral(found: &[(f64, f64)], thickness: f64) -> Option<RecognizedShape> {
    let quad: [(f64, f64); 4] = found.try_into().ok()?;
    if synth::is_rectangular(&quad) {
        let rect = synth::rectify(&quad);
        Some(RecognizedShape {
            kind: ShapeKind::Rectangle,
            points: synth::polygon(&rect.corners, thickness),
        })
    } else {
        Some(RecognizedShape {
            kind: ShapeKind::Quadrilateral,
            points: synth::polygon(&quad, thickness),
        })
    }
}

fn round_shape(coords: &[(f64, f64)], thickness: f64) -> Option<RecognizedShape> {
    let bounds = Bounds::of(coords)?;
    let (long, short) = if bounds.width() >= bounds.height() {
        (bounds.width(), bounds.height())
    } else {
        (bounds.height(), bounds.width())
    };
    // A flat blob has no round interpretation.
    if short <= f64::EPSILON {
        return None;
    }

    if long / short < CIRCLE_ASPECT {
        let center = centroid(coords)?;
        let radius = mean_radius(coords, center);
        if radius <= f64::EPSILON {
            return None;
        }
        Some(RecognizedShape {
            kind: ShapeKind::Circle,
            points: synth::ellipse(center, radius, radius, thickness),
        })
    } else {
        Some(RecognizedShape {
            kind: ShapeKind::Oval,
            points: synth::ellipse(
                bounds.center(),
                bounds.width() / 2.0,
                bounds.height() / 2.0,
                thickness,
            ),
        })
    }
}

fn mean_radius(coords: &[(f64, f64)], center: (f64, f64)) -> f64 {
    coords.iter().map(|&p| distance(p, center)).sum::<f64>() / coords.len() as f64
}

/// Coefficient of variation of the distances from the centroid.
///
/// Low values indicate a round stroke. Returns `f64::INFINITY` when the mean
/// distance is zero, so degenerate input never reads as round.
pub fn circularity_cv(coords: &[(f64, f64)]) -> f64 {
    let Some(center) = centroid(coords) else {
        return f64::INFINITY;
    };
    let mean = mean_radius(coords, center);
    if mean <= f64::EPSILON {
        return f64::INFINITY;
    }
    let variance = coords
        .iter()
        .map(|&p| (distance(p, center) - mean).powi(2))
        .sum::<f64>()
        / coords.len() as f64;
    variance.sqrt() / mean
}
