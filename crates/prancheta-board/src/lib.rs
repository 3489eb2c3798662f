//! # Prancheta Board
//!
//! The tactical board engine: an interactive 2D scene editor for placing
//! players, balls, blocks, arrows and text on a court, drawing freehand
//! strokes, and saving the result as a reusable document.
//!
//! ## Core Components
//!
//! - **Model**: the [`Item`] variants and their hit-testing
//! - **Scene**: ordered items with cheap functional updates
//! - **Board**: [`TacticalBoard`], the pointer-driven state machine
//! - **Drawing**: freehand capture, smoothing and simplification
//! - **History**: snapshot undo/redo with bounded depth
//! - **Renderer**: `tiny-skia` raster output of a scene
//! - **Serialization**: the `PranchetaData` JSON document
//!
//! ## Architecture
//!
//! ```text
//! pointer events
//!   └── TacticalBoard (interaction state machine)
//!         ├── geometry kernel (hit-testing)
//!         ├── DrawingEngine (freehand strokes)
//!         └── Scene (mutation) ── HistoryManager (snapshot)
//!                                   └── host callback ── Renderer
//! DocumentCodec (save/load)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prancheta_board::{TacticalBoard, Tool};
//! use prancheta_core::Point;
//! use prancheta_settings::EditorConfig;
//!
//! let mut board = TacticalBoard::new(Vec::new(), EditorConfig::default())?;
//! board.set_tool(Tool::Ball);
//! board.pointer_down(Point::new(100.0, 100.0));
//! board.pointer_up(Point::new(100.0, 100.0));
//! let pixmap = board.render();
//! ```

pub mod board;
pub mod drawing;
pub mod font_manager;
pub mod history;
pub mod interaction;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod serialization;
pub mod viewport;

pub use board::TacticalBoard;
pub use drawing::{DrawingEngine, StrokeSegment};
pub use history::HistoryManager;
pub use interaction::{BoardResponse, InteractionState, ResizeHandle, Tool};
pub use model::{
    ArrowItem, BallItem, BlockItem, BlockShape, BoardItem, Bounds, DrawingPath, FreeDrawItem,
    Item, ItemCommon, ItemId, ItemType, PlayerItem, Team, TextAlignment, TextItem, TextPatch,
};
pub use renderer::{render, render_to_image, render_with_preview, Preview, RenderOptions};
pub use scene::Scene;
pub use serialization::{DocumentCodec, DocumentMeta, PranchetaData};
pub use viewport::Viewport;
