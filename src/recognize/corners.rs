//! Arc-length resampling and corner detection.

use crate::util::{distance, lerp, turn_angle};

/// Number of evenly spaced samples used for corner finding.
pub const RESAMPLE_COUNT: usize = 40;
/// Turn angles at or above this (degrees) are never corners.
pub const CORNER_ANGLE_MAX: f64 = 160.0;
/// Candidates closer than this many resample slots collapse to the first.
pub const CORNER_INDEX_WINDOW: usize = 4;
/// Corners closer than this (pixels) are merged.
pub const CORNER_MERGE_DISTANCE: f64 = 30.0;

/// Resamples a polyline to exactly `count` points spaced evenly by arc length.
///
/// Returns an empty vector for empty input or `count == 0`. A polyline with no
/// length yields `count` copies of its first point.
pub fn resample(points: &[(f64, f64)], count: usize) -> Vec<(f64, f64)> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }

    let total = crate::util::polyline_length(points);
    if count == 1 || total <= f64::EPSILON {
        return vec![first; count];
    }

    let interval = total / (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    out.push(first);

    let mut travelled = 0.0;
    let mut prev = first;
    let mut i = 1;
    while i < points.len() && out.len() < count {
        let next = points[i];
        let d = distance(prev, next);
        if d > 0.0 && travelled + d >= interval {
            let q = lerp(prev, next, (interval - travelled) / d);
            out.push(q);
            prev = q;
            travelled = 0.0;
        } else {
            travelled += d;
            prev = next;
            i += 1;
        }
    }

    // Rounding can leave the final slot unfilled.
    let last = points[points.len() - 1];
    while out.len() < count {
        out.push(last);
    }
    out
}

/// Turn angle at every resampled point against neighbors two slots away.
///
/// Indices wrap, so the buffer is treated as a closed loop.
pub fn turn_angles(samples: &[(f64, f64)]) -> Vec<f64> {
    let n = samples.len();
    if n < 3 {
        return vec![180.0; n];
    }
    (0..n)
        .map(|i| {
            let prev = samples[(i + n - 2) % n];
            let next = samples[(i + 2) % n];
            turn_angle(prev, samples[i], next)
        })
        .collect()
}

/// Finds polygon-like corners on an evenly resampled stroke.
pub fn detect_corners(samples: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let n = samples.len();
    let angles = turn_angles(samples);

    let mut indices: Vec<usize> = Vec::new();
    for i in 0..n {
        let angle = angles[i];
        if angle >= CORNER_ANGLE_MAX {
            continue;
        }
        let before = angles[(i + n - 1) % n];
        let after = angles[(i + 1) % n];
        if angle > before || angle > after {
            continue;
        }
        if let Some(&last) = indices.last() {
            if i - last <= CORNER_INDEX_WINDOW {
                continue;
            }
        }
        indices.push(i);
    }

    let mut corners: Vec<(f64, f64)> = indices.into_iter().map(|i| samples[i]).collect();

    // Closed-loop wraparound: the start and end of a closed stroke meet.
    if corners.len() >= 2 {
        let first = corners[0];
        let last = corners[corners.len() - 1];
        if distance(first, last) < CORNER_MERGE_DISTANCE {
            corners.pop();
        }
    }

    merge_close_corners(&corners)
}

/// Drops every corner closer than [`CORNER_MERGE_DISTANCE`] to the last kept one.
pub fn merge_close_corners(corners: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut kept: Vec<(f64, f64)> = Vec::with_capacity(corners.len());
    for &corner in corners {
        match kept.last() {
            Some(&last) if distance(last, corner) < CORNER_MERGE_DISTANCE => {}
            _ => kept.push(corner),
        }
    }
    kept
}

/// Merges the two closest cyclically adjacent corners into their midpoint.
///
/// Reduces five corners to four; returns the input unchanged when it has
/// fewer than two corners.
pub fn merge_closest_pair(corners: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let n = corners.len();
    if n < 2 {
        return corners.to_vec();
    }

    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for i in 0..n {
        let d = distance(corners[i], corners[(i + 1) % n]);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }

    let partner = (best + 1) % n;
    let midpoint = lerp(corners[best], corners[partner], 0.5);
    let mut merged = Vec::with_capacity(n - 1);
    for (i, &corner) in corners.iter().enumerate() {
        if i == best {
            merged.push(midpoint);
        } else if i != partner {
            merged.push(corner);
        }
    }
    if partner == 0 {
        // The pair wrapped around; keep the merged corner first.
        merged.rotate_right(1);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_yields_exact_count_with_even_spacing() {
        let line = [(0.0, 0.0), (10.0, 0.0), (100.0, 0.0)];
        let samples = resample(&line, 11);
        assert_eq!(samples.len(), 11);
        for (i, &(x, y)) in samples.iter().enumerate() {
            assert!((x - i as f64 * 10.0).abs() < 1e-6, "sample {i} at {x}");
            assert_eq!(y, 0.0);
        }
    }

    #[test]
    fn resample_handles_degenerate_input() {
        assert!(resample(&[], 40).is_empty());
        let same = resample(&[(3.0, 4.0), (3.0, 4.0)], 5);
        assert_eq!(same, vec![(3.0, 4.0); 5]);
    }

    #[test]
    fn straight_runs_have_no_corners() {
        let samples: Vec<_> = (0..RESAMPLE_COUNT).map(|i| (i as f64 * 5.0, 0.0)).collect();
        let angles = turn_angles(&samples);
        // Interior points see a straight angle; only the wrapped ends turn.
        assert!(angles[2..RESAMPLE_COUNT - 2].iter().all(|a| (a - 180.0).abs() < 1e-9));
    }

    #[test]
    fn merge_close_corners_keeps_first() {
        let merged = merge_close_corners(&[(0.0, 0.0), (10.0, 0.0), (100.0, 0.0), (110.0, 5.0)]);
        assert_eq!(merged, vec![(0.0, 0.0), (100.0, 0.0)]);
    }

    #[test]
    fn merge_closest_pair_reduces_five_to_four() {
        let corners = [
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 60.0),
            (50.0, 62.0),
            (45.0, 60.0),
        ];
        let merged = merge_closest_pair(&corners);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[3], (47.5, 61.0));
    }

    #[test]
    fn merge_closest_pair_wrapping_keeps_order() {
        let corners = [
            (2.0, 0.0),
            (100.0, 0.0),
            (100.0, 60.0),
            (0.0, 60.0),
            (0.0, 2.0),
        ];
        let merged = merge_closest_pair(&corners);
        assert_eq!(merged, vec![(1.0, 1.0), (100.0, 0.0), (100.0, 60.0), (0.0, 60.0)]);
    }
}
