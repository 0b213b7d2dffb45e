//! Library exports for the stroke interpretation core.
//!
//! Exposes the drawing data model, the incremental curve smoother, the batch
//! shape recognizer and the stroke editor state machine so host applications
//! can drive them directly. Configuration types are shared with the bundled
//! diagnostic binaries.

pub mod config;
pub mod draw;
pub mod input;
pub mod recognize;
pub mod smooth;
pub mod stroke_file;
pub mod util;

pub use config::Config;
pub use draw::{Color, Path, PathId, Point};
pub use input::{EditorAction, EditorEvent, StrokeEditor, Tool};
pub use recognize::{RecognizedShape, ShapeKind, recognize};
