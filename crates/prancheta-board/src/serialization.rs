//! Document format for saved boards.
//!
//! A board is persisted as camelCase JSON (`PranchetaData`): the ordered item
//! array plus field size, background and timestamps. Item arrays round-trip
//! exactly. Anything that cannot be mapped back to a known item kind fails
//! with [`BoardError::MalformedDocument`] instead of being dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use prancheta_core::constants::DEFAULT_BACKGROUND_COLOR;
use prancheta_core::{BoardError, FieldDimensions, Result};
use prancheta_settings::EditorConfig;

use crate::model::Item;
use crate::scene::Scene;

fn default_background() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

/// Persisted board document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PranchetaData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub field_dimensions: FieldDimensions,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Document-level fields carried alongside a scene during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMeta {
    pub id: String,
    pub field_dimensions: FieldDimensions,
    pub background_color: String,
    /// Set once, on the first save of a new board.
    pub created_at: Option<DateTime<Utc>>,
}

impl DocumentMeta {
    pub fn new(field_dimensions: FieldDimensions, background_color: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            field_dimensions,
            background_color: background_color.into(),
            created_at: None,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(
            FieldDimensions::new(config.canvas.width, config.canvas.height),
            config.canvas.background_color.clone(),
        )
    }

    /// Meta of a loaded document. Documents without an id get a fresh one.
    pub fn from_document(doc: &PranchetaData) -> Self {
        let id = if doc.id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            doc.id.clone()
        };
        Self {
            id,
            field_dimensions: doc.field_dimensions,
            background_color: doc.background_color.clone(),
            created_at: doc.created_at,
        }
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::new(FieldDimensions::default(), DEFAULT_BACKGROUND_COLOR)
    }
}

pub struct DocumentCodec;

impl DocumentCodec {
    /// Builds a document from the scene. Refreshes `updatedAt` and fixes
    /// `createdAt` on first use.
    pub fn serialize(scene: &Scene, meta: &mut DocumentMeta) -> PranchetaData {
        let now = Utc::now();
        let created_at = *meta.created_at.get_or_insert(now);
        PranchetaData {
            id: meta.id.clone(),
            items: scene.items(),
            field_dimensions: meta.field_dimensions,
            background_color: meta.background_color.clone(),
            created_at: Some(created_at),
            updated_at: Some(now),
        }
    }

    /// Rebuilds the scene of a document. Duplicate ids make it malformed.
    pub fn deserialize(doc: &PranchetaData) -> Result<Scene> {
        Scene::from_items(doc.items.clone()).map_err(|err| match err {
            BoardError::DuplicateItemId { id } => {
                BoardError::malformed(format!("duplicate item id '{}'", id))
            }
            other => other,
        })
    }

    pub fn to_json(doc: &PranchetaData) -> Result<String> {
        Ok(serde_json::to_string_pretty(doc)?)
    }

    /// Parses a document. Invalid JSON and unknown item types are malformed.
    pub fn from_json(json: &str) -> Result<PranchetaData> {
        serde_json::from_str(json).map_err(|err| BoardError::malformed(err.to_string()))
    }

    pub fn save_to_file(doc: &PranchetaData, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = Self::to_json(doc)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        tracing::info!("Saved board {} ({} items) to {}", doc.id, doc.items.len(), path.display());
        Ok(())
    }

    /// Reads and validates a document file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<PranchetaData> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json(&content)?;
        Self::deserialize(&doc)?;
        tracing::info!("Loaded board {} ({} items) from {}", doc.id, doc.items.len(), path.display());
        Ok(doc)
    }
}
