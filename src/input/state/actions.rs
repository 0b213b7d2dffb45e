use crate::draw::{Color, Path};
use crate::input::events::{EditorAction, EditorEvent};
use crate::input::tool::Tool;
use crate::recognize::{self, ShapeKind};
use log::{debug, info, warn};

use super::{DrawingState, StrokeEditor};

impl StrokeEditor {
    /// Dispatches a host action to the matching editor operation.
    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::PointerDown { x, y, pressure } => {
                self.start_path(self.current_color);
                self.append_point(x, y, pressure);
                if self.current_tool == Tool::Eraser {
                    self.erase(x, y);
                }
            }
            EditorAction::PointerMove { x, y, pressure } => {
                if !self.is_drawing() {
                    return;
                }
                self.append_point(x, y, pressure);
                if self.current_tool == Tool::Eraser {
                    self.erase(x, y);
                }
            }
            EditorAction::PointerUp => {
                self.end_path();
            }
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::ClearCanvas => {
                self.clear_canvas();
            }
            EditorAction::ToggleGrid => {
                self.toggle_grid();
            }
            EditorAction::SetTool(tool) => {
                self.set_tool(tool);
            }
            EditorAction::SetColor(color) => {
                self.set_color(color);
            }
            EditorAction::SetStrokeWidth(width) => {
                self.set_stroke_width(width);
            }
            EditorAction::SetSmoothness(smoothness) => {
                self.set_smoothness(smoothness);
            }
            EditorAction::SetPressureSensitivity(enabled) => {
                self.set_pressure_sensitivity(enabled);
            }
            EditorAction::Recolor { from, to } => {
                self.recolor(&from, &to);
            }
            EditorAction::SwitchPalette(colors) => {
                self.switch_palette(colors);
            }
            EditorAction::SnapToShape => {
                self.snap_last_path();
            }
        }
    }

    /// Restores the previous history snapshot. Returns `false` at the oldest one.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            debug!("Nothing to undo");
            return false;
        };
        self.frame.paths = snapshot.to_vec();
        self.push_history_event();
        self.needs_redraw = true;
        true
    }

    /// Re-applies the next history snapshot. Returns `false` at the newest one.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            debug!("Nothing to redo");
            return false;
        };
        self.frame.paths = snapshot.to_vec();
        self.push_history_event();
        self.needs_redraw = true;
        true
    }

    /// Empties the canvas, drops the in-progress path and collapses history
    /// to a single empty snapshot. Not undoable.
    pub fn clear_canvas(&mut self) {
        self.frame.clear();
        self.state = DrawingState::Idle;
        self.history.reset();
        info!("Canvas cleared");
        self.pending_events.push(EditorEvent::CanvasCleared);
        self.push_history_event();
        self.needs_redraw = true;
    }

    /// Remaps path colors after a palette switch.
    ///
    /// With palettes of equal length each color is replaced by the color at
    /// the same index in `new_colors`; colors absent from `old_colors` are
    /// kept. Otherwise every path takes the new primary color. History
    /// snapshots, the in-progress path and the pen color are remapped too, and
    /// no checkpoint is recorded.
    pub fn recolor(&mut self, old_colors: &[Color], new_colors: &[Color]) {
        let Some(&primary) = new_colors.first() else {
            warn!("Ignoring recolor to an empty palette");
            return;
        };

        let remap = |color: Color| -> Color {
            if old_colors.len() != new_colors.len() {
                return primary;
            }
            old_colors
                .iter()
                .position(|old| *old == color)
                .map_or(color, |index| new_colors[index])
        };
        let recolor_path = |path: &mut Path| path.color = remap(path.color);

        self.frame.paths.iter_mut().for_each(recolor_path);
        if let DrawingState::Drawing { path } = &mut self.state {
            recolor_path(path);
        }
        self.history.for_each_path_mut(recolor_path);
        self.current_color = remap(self.current_color);
        self.palette = new_colors.to_vec();

        debug!(
            "Recolored paths from {} to {} palette entries",
            old_colors.len(),
            new_colors.len()
        );
        self.pending_events.push(EditorEvent::Recolored);
        self.needs_redraw = true;
    }

    /// Switches from the active palette to `new_colors`, remapping paths as
    /// [`recolor`](Self::recolor) does.
    pub fn switch_palette(&mut self, new_colors: Vec<Color>) {
        let old_colors = std::mem::take(&mut self.palette);
        self.recolor(&old_colors, &new_colors);
        if self.palette.is_empty() {
            self.palette = old_colors;
        }
    }

    /// Replaces the most recently finalized path with its recognized shape.
    ///
    /// The path keeps its id and color. Returns the recognized kind, or
    /// `None` when there is no path or no shape matched.
    pub fn snap_last_path(&mut self) -> Option<ShapeKind> {
        let fallback = self.current_thickness;
        let path = self.frame.paths.last_mut()?;
        let thickness = path.mean_thickness().unwrap_or(fallback);
        let Some(shape) = recognize::recognize(&path.points, thickness) else {
            debug!("No shape recognized for {:?}", path.id);
            return None;
        };

        path.points = shape.points;
        self.smoother.smooth_all(&mut path.points);
        let id = path.id;
        info!("Snapped {:?} to {}", id, shape.kind.as_str());

        self.pending_events.push(EditorEvent::ShapeSnapped {
            id,
            kind: shape.kind,
        });
        self.checkpoint();
        self.needs_redraw = true;
        Some(shape.kind)
    }
}
