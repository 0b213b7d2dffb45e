use super::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn stroke(coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .map(|&(x, y)| Point::new(x, y, 2.0))
        .collect()
}

/// Walks a closed polygon with roughly `step` pixels between samples.
fn closed_polygon(corners: &[(f64, f64)], step: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    for k in 0..corners.len() {
        let a = corners[k];
        let b = corners[(k + 1) % corners.len()];
        let steps = (distance(a, b) / step).round().max(1.0) as usize;
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            coords.push((a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t));
        }
    }
    coords.push(corners[0]);
    coords
}

fn ellipse_samples(center: (f64, f64), rx: f64, ry: f64, count: usize, start: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let theta = start + TAU * i as f64 / count as f64;
            (center.0 + rx * theta.cos(), center.1 + ry * theta.sin())
        })
        .collect()
}

#[test]
fn short_strokes_are_left_as_freehand() {
    let coords: Vec<_> = (0..MIN_POINTS - 1).map(|i| (i as f64 * 10.0, 0.0)).collect();
    assert!(recognize(&stroke(&coords), 2.0).is_none());
}

#[test]
fn stationary_stroke_has_no_match() {
    let coords = vec![(5.0, 5.0); 20];
    assert!(recognize(&stroke(&coords), 2.0).is_none());
}

#[test]
fn collinear_stroke_becomes_line() {
    let coords: Vec<_> = (0..20).map(|i| (10.0 + i as f64 * 6.0, 40.0 + i as f64 * 2.0)).collect();
    let shape = recognize(&stroke(&coords), 3.0).expect("line");
    assert_eq!(shape.kind, ShapeKind::Line);
    assert_eq!(shape.points.len(), synth::EDGE_STEPS + 1);
    assert_eq!(shape.points[0].pos(), coords[0]);
    assert_eq!(shape.points[synth::EDGE_STEPS].pos(), coords[19]);
    assert!(shape.points.iter().all(|p| p.thickness == 3.0));
    assert!(shape.points.iter().all(|p| p.control_point1.is_none()));
}

#[test]
fn slightly_wobbly_line_is_still_a_line() {
    let coords: Vec<_> = (0..30)
        .map(|i| (i as f64 * 5.0, if i % 2 == 0 { 0.0 } else { 1.0 }))
        .collect();
    let shape = recognize(&stroke(&coords), 2.0).expect("line");
    assert_eq!(shape.kind, ShapeKind::Line);
}

#[test]
fn sampled_circle_becomes_circle_with_matching_radius() {
    let coords = ellipse_samples((100.0, 100.0), 50.0, 50.0, 60, 0.0);
    assert!(circularity_cv(&coords) < ROUND_CV);

    let shape = recognize(&stroke(&coords), 2.0).expect("circle");
    assert_eq!(shape.kind, ShapeKind::Circle);
    assert_eq!(shape.points.len(), synth::ROUND_STEPS + 1);

    let mean_radius = shape
        .points
        .iter()
        .map(|p| distance(p.pos(), (100.0, 100.0)))
        .sum::<f64>()
        / shape.points.len() as f64;
    assert!((mean_radius - 50.0).abs() < 50.0 * 0.02, "radius {mean_radius}");
}

#[test]
fn wide_ellipse_becomes_oval() {
    let coords = ellipse_samples((200.0, 150.0), 100.0, 50.0, 80, FRAC_PI_2);
    let shape = recognize(&stroke(&coords), 2.0).expect("oval");
    assert_eq!(shape.kind, ShapeKind::Oval);

    let bounds = Bounds::of(&shape.points.iter().map(Point::pos).collect::<Vec<_>>()).unwrap();
    assert!((bounds.width() - 200.0).abs() < 1.0);
    assert!((bounds.height() - 100.0).abs() < 1.0);
    assert!(distance(bounds.center(), (200.0, 150.0)) < 1.0);
}

#[test]
fn closed_loop_never_becomes_line() {
    let coords = ellipse_samples((0.0, 0.0), 40.0, 40.0, 50, 0.0);
    let shape = recognize(&stroke(&coords), 2.0);
    assert_ne!(shape.map(|s| s.kind), Some(ShapeKind::Line));
}

#[test]
fn drawn_rectangle_is_rectified() {
    let coords = closed_polygon(&[(0.0, 0.0), (200.0, 0.0), (200.0, 120.0), (0.0, 120.0)], 8.0);
    let shape = recognize(&stroke(&coords), 2.0).expect("rectangle");
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.points.len(), 4 * synth::EDGE_STEPS + 1);

    let pts: Vec<_> = shape.points.iter().map(Point::pos).collect();
    let bounds = Bounds::of(&pts).unwrap();
    assert!(bounds.min_x > -15.0 && bounds.max_x < 215.0);
    assert!(bounds.min_y > -15.0 && bounds.max_y < 135.0);
    assert_eq!(pts[0], pts[pts.len() - 1]);
}

#[test]
fn drawn_triangle_keeps_straight_sides() {
    let coords = closed_polygon(&[(0.0, 0.0), (200.0, 0.0), (100.0, 173.2)], 8.0);
    assert!(circularity_cv(&coords) >= TRIANGLE_ROUND_CV);

    let shape = recognize(&stroke(&coords), 2.0).expect("triangle");
    assert_eq!(shape.kind, ShapeKind::Triangle);
    assert_eq!(shape.points.len(), 3 * synth::EDGE_STEPS + 1);
}

/// Reuleaux triangle of constant `width`: three circular arcs, each centered
/// on the opposite vertex, meeting at three sharp corners.
fn reuleaux_samples(center: (f64, f64), width: f64, per_arc: usize) -> Vec<(f64, f64)> {
    let r = width / 3f64.sqrt();
    let vertices: Vec<_> = (0..3)
        .map(|k| {
            let theta = FRAC_PI_2 + TAU * k as f64 / 3.0;
            (center.0 + r * theta.cos(), center.1 + r * theta.sin())
        })
        .collect();

    let mut coords = Vec::new();
    for k in 0..3 {
        let (from, to, pivot) = (vertices[k], vertices[(k + 1) % 3], vertices[(k + 2) % 3]);
        let start = (from.1 - pivot.1).atan2(from.0 - pivot.0);
        let end = (to.1 - pivot.1).atan2(to.0 - pivot.0);
        let sweep = (end - start + 3.0 * PI).rem_euclid(TAU) - PI;
        for i in 0..per_arc {
            let theta = start + sweep * i as f64 / per_arc as f64;
            coords.push((pivot.0 + width * theta.cos(), pivot.1 + width * theta.sin()));
        }
    }
    coords.push(vertices[0]);
    coords
}

#[test]
fn bulging_three_corner_stroke_becomes_circle() {
    let coords = reuleaux_samples((200.0, 200.0), 200.0, 20);
    let samples = corners::resample(&coords, corners::RESAMPLE_COUNT);
    assert_eq!(corners::detect_corners(&samples).len(), 3);
    assert!(circularity_cv(&coords) < TRIANGLE_ROUND_CV);

    let shape = recognize(&stroke(&coords), 2.0).expect("round");
    assert_eq!(shape.kind, ShapeKind::Circle);
    assert_eq!(shape.points.len(), synth::ROUND_STEPS + 1);
}

#[test]
fn many_cornered_blob_becomes_round() {
    // six-pointed star, outer radius 150, inner radius 50
    let tips: Vec<_> = (0..12)
        .map(|k| {
            let r = if k % 2 == 0 { 150.0 } else { 50.0 };
            let theta = PI * k as f64 / 6.0;
            (200.0 + r * theta.cos(), 200.0 + r * theta.sin())
        })
        .collect();
    let coords = closed_polygon(&tips, 18.0);
    let samples = corners::resample(&coords, corners::RESAMPLE_COUNT);
    assert!(corners::detect_corners(&samples).len() > 5);
    assert!(circularity_cv(&coords) >= ROUND_CV);

    let shape = recognize(&stroke(&coords), 2.0).expect("round");
    assert!(matches!(shape.kind, ShapeKind::Circle | ShapeKind::Oval));
    assert_eq!(shape.points.len(), synth::ROUND_STEPS + 1);
}

#[test]
fn skewed_quadrilateral_stays_a_polygon() {
    let coords = closed_polygon(&[(0.0, 0.0), (200.0, 0.0), (320.0, 120.0), (120.0, 120.0)], 8.0);
    let shape = recognize(&stroke(&coords), 2.0).expect("quadrilateral");
    assert_eq!(shape.kind, ShapeKind::Quadrilateral);
}

#[test]
fn pentagon_reduces_to_four_sides() {
    let corners: Vec<_> = (0..5)
        .map(|k| {
            let theta = -FRAC_PI_2 + TAU * k as f64 / 5.0;
            (150.0 + 100.0 * theta.cos(), 150.0 + 100.0 * theta.sin())
        })
        .collect();
    let coords = closed_polygon(&corners, 6.0);
    let shape = recognize(&stroke(&coords), 2.0).expect("four-sided");
    assert!(matches!(
        shape.kind,
        ShapeKind::Rectangle | ShapeKind::Quadrilateral
    ));
    assert_eq!(shape.points.len(), 4 * synth::EDGE_STEPS + 1);
}

#[test]
fn circularity_of_circle_is_near_zero() {
    let coords = ellipse_samples((0.0, 0.0), 30.0, 30.0, 90, 0.0);
    assert!(circularity_cv(&coords) < 1e-9);
    assert_eq!(circularity_cv(&[(1.0, 1.0), (1.0, 1.0)]), f64::INFINITY);
    assert_eq!(circularity_cv(&[]), f64::INFINITY);
}
