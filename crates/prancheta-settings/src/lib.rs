//! Prancheta Settings Crate
//!
//! Editor configuration: canvas size, interaction tolerances, freehand
//! drawing options, undo depth, and default item sizes.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, DrawingSettings, EditorConfig, HistorySettings, InteractionSettings,
    ItemDefaults, TextMeasurement,
};
pub use error::{ConfigError, SettingsError};
