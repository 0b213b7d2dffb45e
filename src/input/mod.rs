//! Stroke editor and tool state machine.
//!
//! This module turns pointer samples into paths. It maintains the current tool,
//! pen parameters (color, width, pressure), the in-progress path, the finalized
//! paths and the undo/redo history.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{EditorAction, EditorEvent};
pub use state::{DrawingState, EditorSettings, StrokeEditor};
pub use tool::Tool;
