//! Configuration for the tactical board editor.
//!
//! Supports JSON and TOML files. Every section has defaults, so a file only
//! needs to list the values it overrides.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (logical surface size, court color)
//! - Interaction settings (hit tolerance, resize floor, handles)
//! - Drawing settings (smoothing, simplification, stroke width)
//! - History settings (undo depth)
//! - Item defaults (sizes for newly placed items)

use prancheta_core::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BLUE_TEAM_COLOR, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH,
    DEFAULT_ITEM_COLOR, DEFAULT_RED_TEAM_COLOR, HIT_TOLERANCE, MIN_ITEM_SIZE,
};
use prancheta_core::Rgba;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, SettingsError};

/// How text extents are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextMeasurement {
    /// Fixed per-character advance; identical on every machine.
    #[default]
    Estimated,
    /// Glyph advances from installed system fonts.
    SystemFonts,
}

/// Logical canvas surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Logical width in court units
    pub width: f64,
    /// Logical height in court units
    pub height: f64,
    /// Court background color (hex)
    pub background_color: String,
    /// Draw court guide lines under the items
    pub show_court_lines: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            show_court_lines: true,
        }
    }
}

/// Pointer interaction tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Distance tolerance for arrow and freehand hit-testing
    pub hit_tolerance: f64,
    /// Minimum width/height produced by a resize
    pub min_item_size: f64,
    /// Side length of the square resize handles
    pub handle_size: f64,
    /// Also offer n/e/s/w edge handles in addition to the four corners
    pub edge_handles: bool,
    /// Distance moved by one keyboard nudge
    pub nudge_step: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            min_item_size: MIN_ITEM_SIZE,
            handle_size: 8.0,
            edge_handles: false,
            nudge_step: 1.0,
        }
    }
}

/// Freehand drawing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Use quadratic smoothing for strokes with three or more points
    pub smoothing: bool,
    /// Maximum deviation allowed when discarding captured points
    pub simplify_tolerance: f64,
    /// Stroke width for freehand paths
    pub stroke_thickness: f64,
    /// Scale per-sample width by pointer pressure when the device reports it
    pub pressure_sensitive: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            smoothing: true,
            simplify_tolerance: 1.5,
            stroke_thickness: 3.0,
            pressure_sensitive: true,
        }
    }
}

/// Undo/redo history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept, including the initial one
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 50 }
    }
}

/// Sizes and styles for newly placed items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefaults {
    pub color: String,
    /// Player color per team until the host sets an ink color
    pub blue_team_color: String,
    pub red_team_color: String,
    pub player_size: f64,
    pub ball_size: f64,
    pub block_size: f64,
    pub arrow_thickness: f64,
    pub font_size: f64,
    pub font_family: String,
    pub text_placeholder: String,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            color: DEFAULT_ITEM_COLOR.to_string(),
            blue_team_color: DEFAULT_BLUE_TEAM_COLOR.to_string(),
            red_team_color: DEFAULT_RED_TEAM_COLOR.to_string(),
            player_size: 30.0,
            ball_size: 20.0,
            block_size: 30.0,
            arrow_thickness: 2.0,
            font_size: 16.0,
            font_family: "Sans".to_string(),
            text_placeholder: "Texto".to_string(),
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub text_measurement: TextMeasurement,
    pub canvas: CanvasSettings,
    pub interaction: InteractionSettings,
    pub drawing: DrawingSettings,
    pub history: HistorySettings,
    pub defaults: ItemDefaults,
}

fn positive(key: &str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            expected: "> 0".to_string(),
        })
    }
}

fn color(key: &str, value: &str) -> std::result::Result<(), ConfigError> {
    Rgba::parse(value)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidColor {
            key: key.to_string(),
            value: value.to_string(),
        })
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/prancheta/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("prancheta").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        color("canvas.background_color", &self.canvas.background_color)?;

        positive("interaction.hit_tolerance", self.interaction.hit_tolerance)?;
        positive("interaction.min_item_size", self.interaction.min_item_size)?;
        positive("interaction.handle_size", self.interaction.handle_size)?;
        positive("interaction.nudge_step", self.interaction.nudge_step)?;

        if !(self.drawing.simplify_tolerance.is_finite() && self.drawing.simplify_tolerance >= 0.0)
        {
            return Err(ConfigError::OutOfRange {
                key: "drawing.simplify_tolerance".to_string(),
                value: self.drawing.simplify_tolerance.to_string(),
                expected: ">= 0".to_string(),
            });
        }
        positive("drawing.stroke_thickness", self.drawing.stroke_thickness)?;

        if self.history.max_depth < 2 {
            return Err(ConfigError::OutOfRange {
                key: "history.max_depth".to_string(),
                value: self.history.max_depth.to_string(),
                expected: ">= 2".to_string(),
            });
        }

        color("defaults.color", &self.defaults.color)?;
        color("defaults.blue_team_color", &self.defaults.blue_team_color)?;
        color("defaults.red_team_color", &self.defaults.red_team_color)?;
        positive("defaults.player_size", self.defaults.player_size)?;
        positive("defaults.ball_size", self.defaults.ball_size)?;
        positive("defaults.block_size", self.defaults.block_size)?;
        positive("defaults.arrow_thickness", self.defaults.arrow_thickness)?;
        positive("defaults.font_size", self.defaults.font_size)?;

        Ok(())
    }
}
