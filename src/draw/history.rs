//! Linear undo/redo history of finalized-path snapshots.

use super::point::Path;

/// Ordered stack of path-list snapshots with a pointer to the active one.
///
/// The pointer is always a valid index. Pushing after an undo discards every
/// snapshot past the pointer; there is no branching.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Path>>,
    pointer: usize,
    /// Maximum number of snapshots retained (0 = unlimited)
    max_snapshots: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(0)
    }
}

impl History {
    /// Creates a history holding a single empty snapshot.
    pub fn new(max_snapshots: usize) -> Self {
        Self {
            snapshots: vec![Vec::new()],
            pointer: 0,
            max_snapshots,
        }
    }

    /// Records `paths` as the new active snapshot, truncating any redo tail.
    pub fn push(&mut self, paths: &[Path]) {
        self.snapshots.truncate(self.pointer + 1);
        self.snapshots.push(paths.to_vec());
        self.pointer = self.snapshots.len() - 1;

        if self.max_snapshots > 0 && self.snapshots.len() > self.max_snapshots {
            let excess = self.snapshots.len() - self.max_snapshots;
            self.snapshots.drain(..excess);
            self.pointer -= excess;
            log::debug!("History trimmed by {excess} snapshot(s)");
        }
    }

    /// Moves the pointer back one step and returns the snapshot there.
    pub fn undo(&mut self) -> Option<&[Path]> {
        if self.pointer == 0 {
            return None;
        }
        self.pointer -= 1;
        Some(&self.snapshots[self.pointer])
    }

    /// Moves the pointer forward one step and returns the snapshot there.
    pub fn redo(&mut self) -> Option<&[Path]> {
        if self.pointer + 1 >= self.snapshots.len() {
            return None;
        }
        self.pointer += 1;
        Some(&self.snapshots[self.pointer])
    }

    /// Collapses history to a single empty snapshot.
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Vec::new());
        self.pointer = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.snapshots.len()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of retained snapshots (always at least one).
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// The snapshot the pointer refers to.
    pub fn current(&self) -> &[Path] {
        &self.snapshots[self.pointer]
    }

    /// Applies `f` to every path in every snapshot (bulk, non-checkpointed edits).
    pub fn for_each_path_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Path),
    {
        for snapshot in &mut self.snapshots {
            for path in snapshot.iter_mut() {
                f(path);
            }
        }
    }
}
