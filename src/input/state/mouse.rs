use crate::draw::{Color, Path, Point};
use crate::input::{events::EditorEvent, tool::Tool};
use crate::recognize;
use log::{debug, warn};

use super::{DrawingState, StrokeEditor};

/// Samples whose |dx| + |dy| from the previous sample is below this are dropped.
const JITTER_THRESHOLD: f64 = 0.1;

impl StrokeEditor {
    /// Begins a new in-progress path with a fresh id and the given color.
    ///
    /// If a path is already being drawn it is finalized first, exactly as
    /// [`end_path`](Self::end_path) would, so no samples are lost.
    pub fn start_path(&mut self, color: Color) {
        if self.is_drawing() {
            warn!("start_path called while drawing; finalizing the previous path");
            self.end_path();
        }

        let id = self.allocate_path_id();
        debug!("Starting path {:?}", id);
        self.state = DrawingState::Drawing {
            path: Path::new(id, color),
        };
        self.needs_redraw = true;
    }

    /// Appends a pointer sample to the in-progress path.
    ///
    /// Returns `false` when the sample was ignored: not drawing, or within
    /// the micro-jitter threshold of the previous sample.
    pub fn append_point(&mut self, x: f64, y: f64, pressure: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            warn!("Ignoring non-finite pointer sample ({x}, {y})");
            return false;
        }

        let thickness = if self.pressure_sensitive {
            let pressure = if pressure.is_finite() {
                pressure.max(0.0)
            } else {
                1.0
            };
            pressure * self.current_thickness
        } else {
            self.current_thickness
        };

        let smoother = self.smoother;
        let DrawingState::Drawing { path } = &mut self.state else {
            return false;
        };

        if let Some(last) = path.points.last()
            && (x - last.x).abs() + (y - last.y).abs() < JITTER_THRESHOLD
        {
            debug!("Filtered jitter sample ({x:.2}, {y:.2})");
            return false;
        }

        path.points.push(Point::new(x, y, thickness));
        smoother.smooth_tail(&mut path.points);
        self.needs_redraw = true;
        true
    }

    /// Finishes the in-progress path and records a history checkpoint.
    ///
    /// With the eraser active the stroke is only a gesture and is discarded.
    /// With the pen it joins the finalized paths (snapped first when
    /// auto-snap is on). A path with no samples is dropped without a
    /// checkpoint.
    pub fn end_path(&mut self) {
        let DrawingState::Drawing { mut path } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };
        self.needs_redraw = true;

        if self.current_tool == Tool::Eraser {
            debug!("Discarding eraser gesture {:?}", path.id);
            self.checkpoint();
            return;
        }

        if path.points.is_empty() {
            debug!("Dropping empty path {:?}", path.id);
            return;
        }

        let mut snapped = None;
        let thickness = path.mean_thickness().unwrap_or(self.current_thickness);
        if self.auto_snap
            && let Some(shape) = recognize::recognize(&path.points, thickness)
        {
            path.points = shape.points;
            self.smoother.smooth_all(&mut path.points);
            snapped = Some(shape.kind);
        }

        let id = path.id;
        self.frame.add_path(path);
        self.pending_events.push(EditorEvent::PathCommitted(id));
        if let Some(kind) = snapped {
            debug!("Auto-snapped {:?} to {}", id, kind.as_str());
            self.pending_events
                .push(EditorEvent::ShapeSnapped { id, kind });
        }
        self.checkpoint();
    }
}
