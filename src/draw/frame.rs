//! Frame container for the finalized paths of a drawing session.

use super::point::{Path, PathId};
use serde::{Deserialize, Serialize};

/// Container for all finalized paths in the current drawing session.
///
/// Insertion order is z-order for rendering (first = bottom layer, last = top
/// layer). After undo/redo this is the snapshot order, not creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Finalized paths in draw order
    pub paths: Vec<Path>,
    /// Whether the host should draw a background grid
    pub grid_enabled: bool,
}

impl Frame {
    /// Creates a new empty frame with no paths.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            grid_enabled: false,
        }
    }

    /// Removes all paths from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Adds a finalized path on top of existing paths.
    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Removes every path matching `predicate`, returning the removed ids.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<PathId>
    where
        F: FnMut(&Path) -> bool,
    {
        let mut removed = Vec::new();
        self.paths.retain(|path| {
            if predicate(path) {
                removed.push(path.id);
                false
            } else {
                true
            }
        });
        removed
    }
}
