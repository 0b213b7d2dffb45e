use crate::draw::{Path, PathId};
use crate::input::events::EditorEvent;
use crate::util;

use super::StrokeEditor;

/// Whether an eraser of `radius` centered at `query` touches `path`.
///
/// A segment hits when it lies within `radius` plus the mean of its two
/// endpoint thicknesses; a point hits within `radius` plus half its thickness.
pub fn path_hit(path: &Path, query: (f64, f64), radius: f64) -> bool {
    let segment_hit = path.points.windows(2).any(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        let reach = radius + (a.thickness + b.thickness) / 2.0;
        util::point_segment_distance(query, a.pos(), b.pos()) <= reach
    });

    segment_hit
        || path
            .points
            .iter()
            .any(|point| util::distance(query, point.pos()) <= radius + point.thickness / 2.0)
}

impl StrokeEditor {
    /// Removes every finalized path touched by the eraser at `(x, y)`.
    ///
    /// The in-progress path is never affected and the drawing state is not
    /// consulted. Removal is whole-path. No checkpoint is recorded here; the
    /// eraser gesture's [`end_path`](Self::end_path) records one.
    pub fn erase(&mut self, x: f64, y: f64) -> Vec<PathId> {
        let radius = self.eraser_radius;
        let removed = self
            .frame
            .remove_where(|path| path_hit(path, (x, y), radius));

        if !removed.is_empty() {
            log::debug!("Erased {} path(s) at ({x:.1}, {y:.1})", removed.len());
            self.pending_events
                .push(EditorEvent::PathsErased(removed.clone()));
            self.needs_redraw = true;
        }
        removed
    }
}
