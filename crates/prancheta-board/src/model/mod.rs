//! Board item model.
//!
//! Every item on the board is one variant of [`Item`], a closed sum type
//! discriminated by the `type` field in documents. Variant data lives in the
//! per-kind structs of the submodules; each implements [`BoardItem`] and the
//! enum dispatches to them, so adding a variant fails to compile until the
//! hit-tester, resizer, renderer and codec all handle it.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use prancheta_core::Point;

mod arrow;
mod ball;
mod block;
mod free_draw;
mod player;
mod text;

pub use arrow::ArrowItem;
pub use ball::BallItem;
pub use block::{BlockItem, BlockShape};
pub use free_draw::{DrawingPath, FreeDrawItem};
pub use player::{PlayerItem, Team};
pub use text::{TextAlignment, TextItem, TextPatch};

use crate::interaction::ResizeHandle;

/// Stable identifier of an item within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields shared by every item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCommon {
    pub id: ItemId,
    /// Center for positional items, start point for arrows.
    pub position: Point,
    pub color: String,
    /// Editing-session flag; absent in older documents.
    #[serde(default)]
    pub selected: bool,
}

impl ItemCommon {
    pub fn new(position: Point, color: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            position,
            color: color.into(),
            selected: false,
        }
    }
}

/// Axis-aligned bounds in court coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a `width × height` box centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            center.x + width / 2.0,
            center.y + height / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns these bounds grown by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }
}

/// Behavior every item variant provides.
pub trait BoardItem {
    fn common(&self) -> &ItemCommon;
    fn common_mut(&mut self) -> &mut ItemCommon;

    /// Axis-aligned extent used for selection decorations and handles.
    fn bounds(&self) -> Bounds;

    /// Hit test. `tolerance` applies to thin items (arrows, strokes) only.
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;

    fn translate(&mut self, dx: f64, dy: f64);

    /// Whether resize handles apply to this item.
    fn is_resizable(&self) -> bool {
        false
    }

    /// Resizes from `handle` so the dragged edge follows `pointer`, keeping
    /// the center fixed. Sizes never drop below `min_size`.
    fn resize(&mut self, _handle: ResizeHandle, _pointer: Point, _min_size: f64) {}

    fn center(&self) -> Point {
        self.common().position
    }
}

/// New size along each axis for a center-anchored resize.
pub(crate) fn resized_extent(
    handle: ResizeHandle,
    center: Point,
    pointer: Point,
    current: (f64, f64),
    min_size: f64,
) -> (f64, f64) {
    let width = if handle.affects_x() {
        (2.0 * (pointer.x - center.x).abs()).max(min_size)
    } else {
        current.0
    };
    let height = if handle.affects_y() {
        (2.0 * (pointer.y - center.y).abs()).max(min_size)
    } else {
        current.1
    };
    (width, height)
}

/// Discriminant of an [`Item`], as written in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    PlayerBlue,
    PlayerRed,
    Ball,
    Block,
    Text,
    Arrow,
    FreeDraw,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::PlayerBlue => "player-blue",
            ItemType::PlayerRed => "player-red",
            ItemType::Ball => "ball",
            ItemType::Block => "block",
            ItemType::Text => "text",
            ItemType::Arrow => "arrow",
            ItemType::FreeDraw => "free-draw",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One drawable object on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Item {
    PlayerBlue(PlayerItem),
    PlayerRed(PlayerItem),
    Ball(BallItem),
    Block(BlockItem),
    Text(TextItem),
    Arrow(ArrowItem),
    FreeDraw(FreeDrawItem),
}

impl BoardItem for Item {
    fn common(&self) -> &ItemCommon {
        match self {
            Item::PlayerBlue(s) => s.common(),
            Item::PlayerRed(s) => s.common(),
            Item::Ball(s) => s.common(),
            Item::Block(s) => s.common(),
            Item::Text(s) => s.common(),
            Item::Arrow(s) => s.common(),
            Item::FreeDraw(s) => s.common(),
        }
    }

    fn common_mut(&mut self) -> &mut ItemCommon {
        match self {
            Item::PlayerBlue(s) => s.common_mut(),
            Item::PlayerRed(s) => s.common_mut(),
            Item::Ball(s) => s.common_mut(),
            Item::Block(s) => s.common_mut(),
            Item::Text(s) => s.common_mut(),
            Item::Arrow(s) => s.common_mut(),
            Item::FreeDraw(s) => s.common_mut(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Item::PlayerBlue(s) => s.bounds(),
            Item::PlayerRed(s) => s.bounds(),
            Item::Ball(s) => s.bounds(),
            Item::Block(s) => s.bounds(),
            Item::Text(s) => s.bounds(),
            Item::Arrow(s) => s.bounds(),
            Item::FreeDraw(s) => s.bounds(),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Item::PlayerBlue(s) => s.contains_point(p, tolerance),
            Item::PlayerRed(s) => s.contains_point(p, tolerance),
            Item::Ball(s) => s.contains_point(p, tolerance),
            Item::Block(s) => s.contains_point(p, tolerance),
            Item::Text(s) => s.contains_point(p, tolerance),
            Item::Arrow(s) => s.contains_point(p, tolerance),
            Item::FreeDraw(s) => s.contains_point(p, tolerance),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Item::PlayerBlue(s) => s.translate(dx, dy),
            Item::PlayerRed(s) => s.translate(dx, dy),
            Item::Ball(s) => s.translate(dx, dy),
            Item::Block(s) => s.translate(dx, dy),
            Item::Text(s) => s.translate(dx, dy),
            Item::Arrow(s) => s.translate(dx, dy),
            Item::FreeDraw(s) => s.translate(dx, dy),
        }
    }

    fn is_resizable(&self) -> bool {
        match self {
            Item::PlayerBlue(s) => s.is_resizable(),
            Item::PlayerRed(s) => s.is_resizable(),
            Item::Ball(s) => s.is_resizable(),
            Item::Block(s) => s.is_resizable(),
            Item::Text(s) => s.is_resizable(),
            Item::Arrow(s) => s.is_resizable(),
            Item::FreeDraw(s) => s.is_resizable(),
        }
    }

    fn resize(&mut self, handle: ResizeHandle, pointer: Point, min_size: f64) {
        match self {
            Item::PlayerBlue(s) => s.resize(handle, pointer, min_size),
            Item::PlayerRed(s) => s.resize(handle, pointer, min_size),
            Item::Ball(s) => s.resize(handle, pointer, min_size),
            Item::Block(s) => s.resize(handle, pointer, min_size),
            Item::Text(s) => s.resize(handle, pointer, min_size),
            Item::Arrow(s) => s.resize(handle, pointer, min_size),
            Item::FreeDraw(s) => s.resize(handle, pointer, min_size),
        }
    }

    fn center(&self) -> Point {
        match self {
            Item::PlayerBlue(s) => s.center(),
            Item::PlayerRed(s) => s.center(),
            Item::Ball(s) => s.center(),
            Item::Block(s) => s.center(),
            Item::Text(s) => s.center(),
            Item::Arrow(s) => s.center(),
            Item::FreeDraw(s) => s.center(),
        }
    }
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        match self {
            Item::PlayerBlue(_) => ItemType::PlayerBlue,
            Item::PlayerRed(_) => ItemType::PlayerRed,
            Item::Ball(_) => ItemType::Ball,
            Item::Block(_) => ItemType::Block,
            Item::Text(_) => ItemType::Text,
            Item::Arrow(_) => ItemType::Arrow,
            Item::FreeDraw(_) => ItemType::FreeDraw,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.common().id
    }

    pub fn position(&self) -> Point {
        self.common().position
    }

    pub fn color(&self) -> &str {
        &self.common().color
    }

    pub fn is_selected(&self) -> bool {
        self.common().selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.common_mut().selected = selected;
    }

    /// Moves the item so its center lands on `center`.
    pub fn move_center_to(&mut self, center: Point) {
        let current = self.center();
        self.translate(center.x - current.x, center.y - current.y);
    }

    /// The player data and team, for either player variant.
    pub fn as_player(&self) -> Option<(&PlayerItem, Team)> {
        match self {
            Item::PlayerBlue(p) => Some((p, Team::Blue)),
            Item::PlayerRed(p) => Some((p, Team::Red)),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerItem> {
        match self {
            Item::PlayerBlue(p) | Item::PlayerRed(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextItem> {
        match self {
            Item::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextItem> {
        match self {
            Item::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_free_draw_mut(&mut self) -> Option<&mut FreeDrawItem> {
        match self {
            Item::FreeDraw(f) => Some(f),
            _ => None,
        }
    }
}
