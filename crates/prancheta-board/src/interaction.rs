//! Interaction vocabulary: tools, resize handles and controller states.

use std::fmt;
use std::str::FromStr;

use prancheta_core::Point;

use crate::model::{Bounds, ItemId, TextItem};

/// Active toolbar tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Select,
    FreeDraw,
    Arrow,
    PlayerBlue,
    PlayerRed,
    Ball,
    Text,
    Block,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::FreeDraw,
        Tool::Arrow,
        Tool::PlayerBlue,
        Tool::PlayerRed,
        Tool::Ball,
        Tool::Text,
        Tool::Block,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::FreeDraw => "free-draw",
            Tool::Arrow => "arrow",
            Tool::PlayerBlue => "player-blue",
            Tool::PlayerRed => "player-red",
            Tool::Ball => "ball",
            Tool::Text => "text",
            Tool::Block => "block",
        }
    }

    /// Tools that drop a new item where the pointer goes down.
    pub fn is_placement(&self) -> bool {
        matches!(
            self,
            Tool::PlayerBlue | Tool::PlayerRed | Tool::Ball | Tool::Text | Tool::Block
        )
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown tool '{}'", s))
    }
}

/// Resize grip on the selection box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl ResizeHandle {
    pub const CORNERS: [ResizeHandle; 4] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::SouthEast,
    ];

    pub const EDGES: [ResizeHandle; 4] = [
        ResizeHandle::North,
        ResizeHandle::East,
        ResizeHandle::South,
        ResizeHandle::West,
    ];

    /// Handles offered for a selection; corners first.
    pub fn available(edge_handles: bool) -> Vec<ResizeHandle> {
        let mut handles = Self::CORNERS.to_vec();
        if edge_handles {
            handles.extend(Self::EDGES);
        }
        handles
    }

    pub fn affects_x(&self) -> bool {
        !matches!(self, ResizeHandle::North | ResizeHandle::South)
    }

    pub fn affects_y(&self) -> bool {
        !matches!(self, ResizeHandle::East | ResizeHandle::West)
    }

    /// Where this handle sits on `bounds`.
    pub fn anchor(&self, bounds: &Bounds) -> Point {
        let c = bounds.center();
        match self {
            ResizeHandle::NorthWest => Point::new(bounds.min_x, bounds.min_y),
            ResizeHandle::North => Point::new(c.x, bounds.min_y),
            ResizeHandle::NorthEast => Point::new(bounds.max_x, bounds.min_y),
            ResizeHandle::East => Point::new(bounds.max_x, c.y),
            ResizeHandle::SouthEast => Point::new(bounds.max_x, bounds.max_y),
            ResizeHandle::South => Point::new(c.x, bounds.max_y),
            ResizeHandle::SouthWest => Point::new(bounds.min_x, bounds.max_y),
            ResizeHandle::West => Point::new(bounds.min_x, c.y),
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            ResizeHandle::NorthWest => "nw",
            ResizeHandle::North => "n",
            ResizeHandle::NorthEast => "ne",
            ResizeHandle::East => "e",
            ResizeHandle::SouthEast => "se",
            ResizeHandle::South => "s",
            ResizeHandle::SouthWest => "sw",
            ResizeHandle::West => "w",
        }
    }
}

/// Finds the handle of `bounds` under `p`. Handles are squares of side
/// `handle_size` centered on their anchor.
pub fn handle_at(
    bounds: &Bounds,
    p: Point,
    handle_size: f64,
    edge_handles: bool,
) -> Option<ResizeHandle> {
    let half = handle_size / 2.0;
    ResizeHandle::available(edge_handles)
        .into_iter()
        .find(|h| {
            let a = h.anchor(bounds);
            (p.x - a.x).abs() <= half && (p.y - a.y).abs() <= half
        })
}

/// Interaction controller state. Exactly one gesture is in flight at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        id: ItemId,
        /// Pointer minus item center at pointer-down.
        offset: Point,
        moved: bool,
    },
    Resizing {
        id: ItemId,
        handle: ResizeHandle,
        changed: bool,
    },
    DrawingArrow {
        start: Point,
        current: Point,
        color: String,
        thickness: f64,
    },
    FreeDrawing,
    EditingText {
        id: ItemId,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Dragging { .. } => "dragging",
            InteractionState::Resizing { .. } => "resizing",
            InteractionState::DrawingArrow { .. } => "drawing-arrow",
            InteractionState::FreeDrawing => "free-drawing",
            InteractionState::EditingText { .. } => "editing-text",
        }
    }
}

/// What the host should do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardResponse {
    /// Nothing changed.
    None,
    /// Live change that is not yet in history; repaint.
    Repaint,
    /// An action was committed to history.
    Committed,
    /// Open the text dialog with these fields.
    EditText(TextItem),
    /// Ask for a jersey number for this player.
    RequestJerseyNumber { id: ItemId, current: Option<u32> },
}
