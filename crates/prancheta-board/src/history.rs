//! Snapshot-based undo/redo.
//!
//! The manager stores whole scenes. Because [`Scene`] shares unchanged items
//! by `Arc`, a snapshot costs one vector of pointers.

use crate::scene::Scene;

/// Default bound on stored snapshots, the initial one included.
pub const DEFAULT_MAX_DEPTH: usize = 50;

#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: Vec<Scene>,
    cursor: usize,
    max_depth: usize,
}

impl HistoryManager {
    /// Starts a history whose only entry is `initial`.
    pub fn new(initial: Scene, max_depth: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_depth: max_depth.max(2),
        }
    }

    /// Records a new state after the cursor, discarding any redo branch.
    pub fn commit(&mut self, scene: Scene) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(scene);
        if self.snapshots.len() > self.max_depth {
            let excess = self.snapshots.len() - self.max_depth;
            self.snapshots.drain(..excess);
            tracing::debug!("History trimmed {} oldest snapshot(s)", excess);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps back. Returns `None` at the oldest snapshot.
    pub fn undo(&mut self) -> Option<&Scene> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor)
    }

    /// Steps forward. Returns `None` at the newest snapshot.
    pub fn redo(&mut self) -> Option<&Scene> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn current(&self) -> &Scene {
        &self.snapshots[self.cursor]
    }

    /// Drops every snapshot and restarts from `initial`.
    pub fn clear(&mut self, initial: Scene) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.cursor = 0;
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(Scene::new(), DEFAULT_MAX_DEPTH)
    }
}
