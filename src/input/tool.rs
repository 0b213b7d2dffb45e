//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool decides what a finished stroke does: the pen commits it as
/// a path, the eraser discards it after removing every path it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand drawing (default)
    #[default]
    Pen,
    /// Removes whole paths under the pointer
    Eraser,
}
