//! Interaction controller for one open board.
//!
//! `TacticalBoard` turns pointer events and toolbar actions into scene
//! mutations. Live changes (drag, resize, stroke capture) patch the scene in
//! place; each finished gesture or editor action commits exactly one history
//! snapshot and then calls the host's change callback.
//!
//! The impl is split across submodules:
//! - `pointer`: pointer-down/move/up/cancel and double-click
//! - `text_edit`: text dialog results and jersey numbers
//! - `actions`: undo/redo and toolbar editor actions
//! - `file_io`: document load/save

mod actions;
mod file_io;
mod pointer;
mod text_edit;

use std::fmt;

use prancheta_core::{BoardError, Point, Result, Rgba};
use prancheta_settings::EditorConfig;
use tiny_skia::Pixmap;

use crate::drawing::DrawingEngine;
use crate::font_manager::{measurer_for, TextMeasurer, TextStyle};
use crate::history::HistoryManager;
use crate::interaction::{InteractionState, Tool};
use crate::model::{BlockShape, Item, ItemId, TextItem};
use crate::renderer::{self, Preview, RenderOptions};
use crate::scene::Scene;
use crate::serialization::DocumentMeta;
use crate::viewport::Viewport;

type ChangeCallback = Box<dyn FnMut(&[Item])>;

pub struct TacticalBoard {
    scene: Scene,
    history: HistoryManager,
    drawing: DrawingEngine,
    state: InteractionState,
    tool: Tool,
    color: String,
    /// Set once the host picks an ink color; until then players use team colors.
    color_picked: bool,
    block_shape: BlockShape,
    config: EditorConfig,
    viewport: Viewport,
    measurer: Box<dyn TextMeasurer>,
    meta: DocumentMeta,
    last_pointer: Option<Point>,
    /// Free-draw item that further strokes of the current session extend.
    free_draw_target: Option<ItemId>,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for TacticalBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TacticalBoard")
            .field("items", &self.scene.len())
            .field("state", &self.state)
            .field("tool", &self.tool)
            .field("color", &self.color)
            .field("history_depth", &self.history.depth())
            .finish()
    }
}

impl TacticalBoard {
    /// Opens a board on `initial_items`. Duplicate ids are rejected.
    pub fn new(initial_items: Vec<Item>, config: EditorConfig) -> Result<Self> {
        let scene = Scene::from_items(initial_items)?;
        let history = HistoryManager::new(scene.clone(), config.history.max_depth);
        let drawing = DrawingEngine::new(
            config.drawing.smoothing,
            config.drawing.simplify_tolerance,
            config.drawing.pressure_sensitive,
        );
        let viewport = Viewport::new(config.canvas.width, config.canvas.height);
        let measurer = measurer_for(config.text_measurement);
        let meta = DocumentMeta::from_config(&config);

        tracing::debug!("Board opened with {} items", scene.len());

        Ok(Self {
            scene,
            history,
            drawing,
            state: InteractionState::Idle,
            tool: Tool::Select,
            color: config.defaults.color.clone(),
            color_picked: false,
            block_shape: BlockShape::default(),
            config,
            viewport,
            measurer,
            meta,
            last_pointer: None,
            free_draw_target: None,
            on_change: None,
        })
    }

    /// Replaces the text measurer.
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Registers the callback invoked with the items after every commit,
    /// undo and redo.
    pub fn on_change(&mut self, callback: impl FnMut(&[Item]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn items(&self) -> Vec<Item> {
        self.scene.items()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    /// Converts a device pointer position to court coordinates.
    pub fn to_logical(&self, device_x: f64, device_y: f64) -> Point {
        self.viewport.device_to_logical(device_x, device_y)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the active tool. Takes effect at the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            tracing::debug!("Tool {} -> {}", self.tool, tool);
            self.tool = tool;
            self.free_draw_target = None;
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the ink color for new items.
    pub fn set_color(&mut self, hex: &str) -> Result<()> {
        Rgba::parse(hex)?;
        self.color = hex.to_string();
        self.color_picked = true;
        Ok(())
    }

    /// Color a new item of `tool` gets.
    fn placement_color(&self, tool: Tool) -> String {
        let defaults = &self.config.defaults;
        match tool {
            Tool::PlayerBlue if !self.color_picked => defaults.blue_team_color.clone(),
            Tool::PlayerRed if !self.color_picked => defaults.red_team_color.clone(),
            _ => self.color.clone(),
        }
    }

    pub fn block_shape(&self) -> BlockShape {
        self.block_shape
    }

    pub fn set_block_shape(&mut self, shape: BlockShape) {
        self.block_shape = shape;
    }

    pub fn selected_id(&self) -> Option<&ItemId> {
        self.scene.selected().map(|i| i.id())
    }

    /// Render settings for the current board.
    pub fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::from_config(&self.config);
        options.background_color = self.meta.background_color.clone();
        options
    }

    /// Feedback for the gesture in progress, if it draws any.
    pub fn preview(&self) -> Option<Preview> {
        match &self.state {
            InteractionState::DrawingArrow {
                start,
                current,
                color,
                thickness,
            } => Some(Preview::Arrow {
                start: *start,
                end: *current,
                color: color.clone(),
                thickness: *thickness,
            }),
            InteractionState::FreeDrawing => {
                let path = self.drawing.preview_path()?;
                let (color, thickness) = self.drawing.current_style()?;
                Some(Preview::Stroke {
                    path,
                    color: color.to_string(),
                    thickness,
                })
            }
            _ => None,
        }
    }

    /// Paints the board including any in-flight gesture.
    pub fn render(&self) -> Option<Pixmap> {
        renderer::render_with_preview(
            &self.scene,
            &self.viewport,
            &self.render_options(),
            self.preview().as_ref(),
        )
    }

    fn measure_text(&self, text: &mut TextItem) {
        let (w, h) = self.measurer.measure(
            &text.text,
            TextStyle {
                family: &text.font_family,
                size: text.font_size,
                bold: text.bold,
                italic: text.italic,
            },
        );
        text.width = Some(w.max(text.font_size * 0.6));
        text.height = Some(h);
    }

    /// Records the current scene as one history entry and notifies the host.
    fn commit(&mut self, action: &str) {
        self.history.commit(self.scene.clone());
        tracing::debug!(
            "Committed {}: {} items, history {}/{}",
            action,
            self.scene.len(),
            self.history.cursor() + 1,
            self.history.depth()
        );
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            let items = self.scene.items();
            callback(&items);
        }
    }

    fn require_item(&self, id: &ItemId) -> Result<&Item> {
        self.scene
            .get(id)
            .ok_or_else(|| BoardError::ItemNotFound { id: id.to_string() })
    }
}
