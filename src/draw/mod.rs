//! Drawing data model.
//!
//! This module defines the core drawing types shared across the crate:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`] / [`Path`]: stroke samples and the strokes built from them
//! - [`Frame`]: Container for all finalized paths in the current drawing
//! - [`History`]: Linear undo/redo stack of path-list snapshots

pub mod color;
pub mod frame;
pub mod history;
pub mod point;

// Re-export commonly used types at module level
pub use color::{BLACK, BLUE, Color, DEFAULT_PALETTE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
pub use frame::Frame;
pub use history::History;
pub use point::{Path, PathId, Point};
