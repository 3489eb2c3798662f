//! Undo/redo and toolbar editor actions.
//!
//! Actions run only between gestures; while one is in flight they are
//! no-ops and return false.

use super::TacticalBoard;
use crate::model::BoardItem;
use crate::scene::Scene;

impl TacticalBoard {
    pub fn can_undo(&self) -> bool {
        self.state.is_idle() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.is_idle() && self.history.can_redo()
    }

    /// Restores the previous snapshot. False at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        let Some(scene) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(scene, "undo");
        true
    }

    /// Re-applies the next snapshot. False at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        let Some(scene) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(scene, "redo");
        true
    }

    fn restore(&mut self, scene: Scene, action: &str) {
        self.scene = scene;
        self.free_draw_target = None;
        tracing::debug!(
            "{}: {} items, history {}/{}",
            action,
            self.scene.len(),
            self.history.cursor() + 1,
            self.history.depth()
        );
        self.notify();
    }

    pub fn delete_selected(&mut self) -> bool {
        if !self.state.is_idle() || self.scene.selected().is_none() {
            return false;
        }
        self.scene = self.scene.remove_selected();
        self.commit("delete");
        true
    }

    pub fn bring_selected_to_front(&mut self) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        let before = self.scene.clone();
        for id in self.scene.selected_ids() {
            match self.scene.bring_to_front(&id) {
                Ok(scene) => self.scene = scene,
                Err(err) => tracing::warn!("Bring to front failed: {}", err),
            }
        }
        let reordered = before
            .iter()
            .map(|i| i.id())
            .ne(self.scene.iter().map(|i| i.id()));
        if reordered {
            self.commit("bring to front");
        }
        reordered
    }

    /// Removes every item.
    pub fn clear_board(&mut self) -> bool {
        if !self.state.is_idle() || self.scene.is_empty() {
            return false;
        }
        self.scene = self.scene.clear();
        self.free_draw_target = None;
        self.commit("clear");
        true
    }

    /// Moves the selection by a fixed offset; one entry per call.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) -> bool {
        if !self.state.is_idle() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        let ids = self.scene.selected_ids();
        if ids.is_empty() {
            return false;
        }
        for id in &ids {
            self.scene.patch_in_place(id, |item| item.translate(dx, dy));
        }
        self.commit("nudge");
        true
    }

    /// Distance of one keyboard nudge.
    pub fn nudge_step(&self) -> f64 {
        self.config.interaction.nudge_step
    }
}
