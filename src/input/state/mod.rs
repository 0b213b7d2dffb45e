mod actions;
mod core;
mod eraser;
mod mouse;

pub use core::{DrawingState, EditorSettings, StrokeEditor};
pub use eraser::path_hit;
