//! Shared numeric defaults for the tactical board.

/// Logical canvas width in court units.
pub const DEFAULT_FIELD_WIDTH: f64 = 500.0;

/// Logical canvas height in court units.
pub const DEFAULT_FIELD_HEIGHT: f64 = 700.0;

/// Distance tolerance used when hit-testing arrows and freehand strokes.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Smallest width or height a resize gesture may produce.
pub const MIN_ITEM_SIZE: f64 = 10.0;

/// Court background used when a document does not specify one.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#2e7d32";

/// Ink color used when no color has been chosen yet.
pub const DEFAULT_ITEM_COLOR: &str = "#000000";

/// Blue-team players before the host picks an ink color.
pub const DEFAULT_BLUE_TEAM_COLOR: &str = "#1565c0";

/// Red-team players before the host picks an ink color.
pub const DEFAULT_RED_TEAM_COLOR: &str = "#c62828";
