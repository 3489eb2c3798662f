//! Error handling for the tactical board.
//!
//! Most board operations never fail: geometry clamps, and undo/redo at the
//! stack boundaries are no-ops. The variants below cover the few places where
//! silently continuing would lose tactical-plan content.

use thiserror::Error;

/// Errors produced by scene mutation and document handling.
#[derive(Error, Debug)]
pub enum BoardError {
    /// A persisted document could not be interpreted.
    #[error("Malformed document: {reason}")]
    MalformedDocument {
        /// What was wrong with the document.
        reason: String,
    },

    /// An item with this id is already present in the scene.
    #[error("Duplicate item id: {id}")]
    DuplicateItemId {
        /// The conflicting id.
        id: String,
    },

    /// No item with this id exists in the scene.
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A color string is not a valid `#RGB`, `#RRGGBB` or `#RRGGBBAA` value.
    #[error("Invalid color '{value}'")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a malformed-document error from a message
    pub fn malformed(reason: impl Into<String>) -> Self {
        BoardError::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Check if this error means the document content cannot be trusted
    pub fn is_malformed(&self) -> bool {
        matches!(self, BoardError::MalformedDocument { .. })
    }
}

/// Result type using BoardError
pub type Result<T> = std::result::Result<T, BoardError>;
