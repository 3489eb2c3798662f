//! Results of the host's edit dialogs.

use prancheta_core::Result;

use super::TacticalBoard;
use crate::interaction::{BoardResponse, InteractionState};
use crate::model::{ItemId, TextItem, TextPatch};

impl TacticalBoard {
    /// The text item whose dialog is open.
    pub fn editing_text(&self) -> Option<&TextItem> {
        match &self.state {
            InteractionState::EditingText { id } => self.scene.get(id).and_then(|i| i.as_text()),
            _ => None,
        }
    }

    /// Applies the dialog's fields, re-measures, and commits when anything
    /// changed. Leaves text-edit mode either way.
    pub fn commit_text_edit(&mut self, patch: &TextPatch) -> Result<BoardResponse> {
        let InteractionState::EditingText { id } = std::mem::take(&mut self.state) else {
            return Ok(BoardResponse::None);
        };
        self.require_item(&id)?;

        let mut changed = false;
        let next = self.scene.update_item(&id, |item| {
            if let Some(text) = item.as_text_mut() {
                changed = text.apply(patch);
                if changed {
                    self.measure_text(text);
                }
            }
        })?;

        if !changed {
            return Ok(BoardResponse::None);
        }
        self.scene = next;
        self.commit("edit text");
        Ok(BoardResponse::Committed)
    }

    /// Closes the dialog without changes.
    pub fn cancel_text_edit(&mut self) -> BoardResponse {
        if matches!(self.state, InteractionState::EditingText { .. }) {
            self.state = InteractionState::Idle;
        }
        BoardResponse::None
    }

    /// Stores a jersey number, or clears it with `None`. Ignored while a
    /// gesture is in flight.
    pub fn set_player_number(&mut self, id: &ItemId, number: Option<u32>) -> Result<BoardResponse> {
        if !self.state.is_idle() {
            return Ok(BoardResponse::None);
        }
        let item = self.require_item(id)?;
        let Some((player, _)) = item.as_player() else {
            tracing::warn!("Item {} is not a player, ignoring jersey number", id);
            return Ok(BoardResponse::None);
        };
        if player.number == number {
            return Ok(BoardResponse::None);
        }

        self.scene = self.scene.update_item(id, |item| {
            if let Some(player) = item.as_player_mut() {
                player.number = number;
            }
        })?;
        self.commit("jersey number");
        Ok(BoardResponse::Committed)
    }
}
