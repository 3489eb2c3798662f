//! # Prancheta
//!
//! A tactical drawing board for planning futsal and football training
//! sessions: players, balls, blocks, arrows, text and freehand strokes on a
//! court, with undo/redo, a raster renderer and a JSON document format.
//!
//! ## Architecture
//!
//! Prancheta is organized as a workspace with multiple crates:
//!
//! 1. **prancheta-core** - Points, geometry kernel, colors, errors
//! 2. **prancheta-settings** - Editor configuration (JSON/TOML)
//! 3. **prancheta-board** - Scene model, interaction controller, renderer, documents
//! 4. **prancheta** - This crate: re-exports, logging setup and the CLI

pub use prancheta_board as board;
pub use prancheta_core::{constants, geometry};

pub use prancheta_core::{BoardError, FieldDimensions, Point, Result, Rgba};
pub use prancheta_settings::{EditorConfig, SettingsError, TextMeasurement};

pub use prancheta_board::{
    render, render_to_image, render_with_preview, ArrowItem, BallItem, BlockItem, BlockShape,
    BoardItem, BoardResponse, Bounds, DocumentCodec, DocumentMeta, DrawingEngine, DrawingPath,
    FreeDrawItem, HistoryManager, InteractionState, Item, ItemCommon, ItemId, ItemType,
    PlayerItem, PranchetaData, Preview, RenderOptions, ResizeHandle, Scene, TacticalBoard, Team,
    TextAlignment, TextItem, TextPatch, Tool, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so command output on stdout stays clean.
/// `RUST_LOG` overrides the `info` default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
