//! Editor actions (host to editor) and notifications (editor to host).

use super::tool::Tool;
use crate::draw::{Color, PathId};
use crate::recognize::ShapeKind;

/// A user gesture or command delivered by the host UI.
///
/// Dispatched with [`StrokeEditor::apply`](super::StrokeEditor::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Pointer pressed: starts a path and records the first sample
    PointerDown { x: f64, y: f64, pressure: f64 },
    /// Pointer dragged: appends a sample to the in-progress path
    PointerMove { x: f64, y: f64, pressure: f64 },
    /// Pointer released: finalizes the in-progress path
    PointerUp,
    Undo,
    Redo,
    ClearCanvas,
    ToggleGrid,
    SetTool(Tool),
    SetColor(Color),
    SetStrokeWidth(f64),
    SetSmoothness(f64),
    SetPressureSensitivity(bool),
    /// Theme switch: remap path colors from one palette to another
    Recolor { from: Vec<Color>, to: Vec<Color> },
    /// Theme switch from the editor's active palette
    SwitchPalette(Vec<Color>),
    /// Replace the most recent path with its recognized shape
    SnapToShape,
}

/// State change notification queued for the host.
///
/// Drained with [`StrokeEditor::take_events`](super::StrokeEditor::take_events).
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A path was moved into the finalized list
    PathCommitted(PathId),
    /// Finalized paths were removed by the eraser
    PathsErased(Vec<PathId>),
    /// The history pointer moved or a checkpoint was recorded
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// A path was replaced by an idealized shape
    ShapeSnapped { id: PathId, kind: ShapeKind },
    /// Canvas and history were reset
    CanvasCleared,
    /// Path colors were remapped to a new palette
    Recolored,
}
