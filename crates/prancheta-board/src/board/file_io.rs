//! Document load/save for an open board.

use std::path::Path;

use prancheta_core::Result;
use prancheta_settings::EditorConfig;

use super::TacticalBoard;
use crate::interaction::InteractionState;
use crate::serialization::{DocumentCodec, DocumentMeta, PranchetaData};
use crate::viewport::Viewport;

impl TacticalBoard {
    /// Opens a board on a loaded document.
    pub fn from_document(doc: &PranchetaData, config: EditorConfig) -> Result<Self> {
        let mut board = Self::new(Vec::new(), config)?;
        board.load_document(doc)?;
        Ok(board)
    }

    /// Snapshot of the board as a document.
    pub fn to_document(&mut self) -> PranchetaData {
        DocumentCodec::serialize(&self.scene, &mut self.meta)
    }

    /// Replaces the board contents with `doc` and restarts history.
    pub fn load_document(&mut self, doc: &PranchetaData) -> Result<()> {
        let scene = DocumentCodec::deserialize(doc)?;
        self.meta = DocumentMeta::from_document(doc);
        self.viewport = Viewport::from_field(doc.field_dimensions);
        self.history.clear(scene.clone());
        self.scene = scene;
        self.state = InteractionState::Idle;
        self.drawing.cancel();
        self.free_draw_target = None;
        self.last_pointer = None;
        self.notify();
        Ok(())
    }

    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let doc = self.to_document();
        DocumentCodec::save_to_file(&doc, path)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let doc = DocumentCodec::load_from_file(path)?;
        self.load_document(&doc)
    }
}
