//! Drawing state machine and editor session state.

use crate::config::Config;
use crate::draw::{Color, DEFAULT_PALETTE, Frame, History, Path};
use crate::input::{events::EditorEvent, tool::Tool};
use crate::smooth::{CurveSmoother, DEFAULT_SMOOTHNESS};

/// Minimum pen width in pixels.
pub const MIN_STROKE_WIDTH: f64 = 0.5;
/// Maximum pen width in pixels.
pub const MAX_STROKE_WIDTH: f64 = 50.0;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or actively drawing a path. Transitions
/// occur on pointer press/release.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// Pointer held down, samples accumulating into `path`
    Drawing {
        /// The in-progress path (not yet part of the frame)
        path: Path,
    },
}

/// Startup parameters for a [`StrokeEditor`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    /// Initial pen color
    pub color: Color,
    /// Pen width in pixels
    pub stroke_width: f64,
    /// Scale width by pointer pressure
    pub pressure_sensitive: bool,
    /// Bezier control-point smoothness (0.0 - 1.0)
    pub smoothness: f64,
    /// Eraser hit radius in pixels
    pub eraser_radius: f64,
    /// Snap each finished pen stroke to a recognized shape
    pub auto_snap: bool,
    /// Maximum history snapshots (0 = unlimited)
    pub max_snapshots: usize,
    /// Active palette, index 0 is primary
    pub palette: Vec<Color>,
    /// Initial grid flag
    pub grid_enabled: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_PALETTE[0],
            stroke_width: 3.0,
            pressure_sensitive: false,
            smoothness: DEFAULT_SMOOTHNESS,
            eraser_radius: 10.0,
            auto_snap: false,
            max_snapshots: 0,
            palette: DEFAULT_PALETTE.to_vec(),
            grid_enabled: false,
        }
    }
}

impl EditorSettings {
    /// Builds editor settings from a validated [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.default_color(),
            stroke_width: config.drawing.stroke_width,
            pressure_sensitive: config.drawing.pressure_sensitive,
            smoothness: config.drawing.smoothness,
            eraser_radius: config.eraser.radius,
            auto_snap: config.recognition.auto_snap,
            max_snapshots: config.history.max_snapshots,
            palette: config.palette_colors(),
            grid_enabled: config.canvas.grid_enabled,
        }
    }
}

/// Owned editor session: finalized paths, the in-progress path, pen
/// parameters and the undo/redo history.
///
/// Every mutation sets `needs_redraw` and may queue [`EditorEvent`]s for the
/// host, drained with [`take_events`](Self::take_events). Calls that are not
/// valid in the current state are ignored rather than reported.
pub struct StrokeEditor {
    /// Finalized paths and canvas flags
    pub(crate) frame: Frame,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Current pen color
    pub current_color: Color,
    /// Current pen width in pixels
    pub current_thickness: f64,
    /// Active tool
    pub current_tool: Tool,
    /// Scale width by pointer pressure
    pub pressure_sensitive: bool,
    /// Eraser hit radius in pixels
    pub eraser_radius: f64,
    /// Snap each finished pen stroke to a recognized shape
    pub auto_snap: bool,
    /// Active palette, index 0 is primary
    pub palette: Vec<Color>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    pub(crate) smoother: CurveSmoother,
    pub(crate) history: History,
    pub(crate) next_path_id: u64,
    pub(crate) pending_events: Vec<EditorEvent>,
}

impl Default for StrokeEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl StrokeEditor {
    /// Creates an idle editor with an empty canvas and a single empty
    /// history snapshot.
    pub fn new(settings: EditorSettings) -> Self {
        let palette = if settings.palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            settings.palette
        };

        let mut frame = Frame::new();
        frame.grid_enabled = settings.grid_enabled;

        Self {
            frame,
            state: DrawingState::Idle,
            current_color: settings.color,
            current_thickness: clamp_width(settings.stroke_width),
            current_tool: Tool::Pen,
            pressure_sensitive: settings.pressure_sensitive,
            eraser_radius: settings.eraser_radius.max(0.0),
            auto_snap: settings.auto_snap,
            palette,
            needs_redraw: true,
            smoother: CurveSmoother::new(settings.smoothness),
            history: History::new(settings.max_snapshots),
            next_path_id: 1,
            pending_events: Vec::new(),
        }
    }

    /// Creates an editor configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(EditorSettings::from_config(config))
    }

    /// Finalized paths in draw order (first = bottom).
    pub fn paths(&self) -> &[Path] {
        &self.frame.paths
    }

    /// The path currently being drawn, if any.
    pub fn in_progress(&self) -> Option<&Path> {
        match &self.state {
            DrawingState::Drawing { path } => Some(path),
            DrawingState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn grid_enabled(&self) -> bool {
        self.frame.grid_enabled
    }

    pub fn smoothness(&self) -> f64 {
        self.smoother.smoothness()
    }

    /// Drains queued notifications in the order they were raised.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.current_tool != tool {
            log::debug!("Tool changed to {tool:?}");
            self.current_tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Sets the pen color for subsequent paths.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        self.needs_redraw = true;
    }

    /// Sets the pen width, clamped to 0.5 - 50.0 px.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.current_thickness = clamp_width(width);
        self.needs_redraw = true;
    }

    pub fn set_pressure_sensitivity(&mut self, enabled: bool) {
        self.pressure_sensitive = enabled;
    }

    /// Toggles the background grid flag. Not an undo step.
    pub fn toggle_grid(&mut self) {
        self.frame.grid_enabled = !self.frame.grid_enabled;
        self.needs_redraw = true;
    }

    /// Changes the smoothness coefficient and re-derives control points for
    /// every finalized path, the in-progress path and every history snapshot.
    pub fn set_smoothness(&mut self, smoothness: f64) {
        let smoother = CurveSmoother::new(smoothness);
        if smoother == self.smoother {
            return;
        }
        self.smoother = smoother;

        for path in &mut self.frame.paths {
            smoother.smooth_all(&mut path.points);
        }
        if let DrawingState::Drawing { path } = &mut self.state {
            smoother.smooth_all(&mut path.points);
        }
        self.history
            .for_each_path_mut(|path| smoother.smooth_all(&mut path.points));

        log::debug!(
            "Smoothness set to {:.3}, recomputed control points",
            smoother.smoothness()
        );
        self.needs_redraw = true;
    }

    /// Records the current path list as a history checkpoint.
    pub(crate) fn checkpoint(&mut self) {
        self.history.push(&self.frame.paths);
        log::debug!(
            "Checkpoint {}/{} with {} path(s)",
            self.history.pointer() + 1,
            self.history.snapshot_count(),
            self.history.current().len()
        );
        self.push_history_event();
    }

    pub(crate) fn push_history_event(&mut self) {
        self.pending_events.push(EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }

    pub(crate) fn allocate_path_id(&mut self) -> crate::draw::PathId {
        let id = crate::draw::PathId(self.next_path_id);
        self.next_path_id += 1;
        id
    }
}

fn clamp_width(width: f64) -> f64 {
    if width.is_nan() {
        return EditorSettings::default().stroke_width;
    }
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}
