use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use prancheta_core::geometry::{hit_axis_aligned_box, hit_circle, hit_triangle};

use super::{resized_extent, BoardItem, Bounds, ItemCommon, Point};
use crate::interaction::ResizeHandle;

pub const DEFAULT_BLOCK_SIZE: f64 = 30.0;

/// Outline of an obstacle marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockShape {
    #[default]
    Rectangle,
    Triangle,
    Circle,
}

impl fmt::Display for BlockShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockShape::Rectangle => write!(f, "rectangle"),
            BlockShape::Triangle => write!(f, "triangle"),
            BlockShape::Circle => write!(f, "circle"),
        }
    }
}

impl FromStr for BlockShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(BlockShape::Rectangle),
            "triangle" => Ok(BlockShape::Triangle),
            "circle" => Ok(BlockShape::Circle),
            other => Err(format!("unknown block shape '{}'", other)),
        }
    }
}

/// Obstacle or cone marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockItem {
    #[serde(flatten)]
    pub common: ItemCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub shape: BlockShape,
}

impl BlockItem {
    pub fn new(position: Point, color: impl Into<String>, size: f64, shape: BlockShape) -> Self {
        Self {
            common: ItemCommon::new(position, color),
            width: Some(size),
            height: Some(size),
            shape,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_BLOCK_SIZE),
            self.height.unwrap_or(DEFAULT_BLOCK_SIZE),
        )
    }

    /// Triangle vertices: apex at top center, base along the bottom edge.
    pub fn triangle_vertices(&self) -> [Point; 3] {
        let b = self.bounds();
        [
            Point::new(b.min_x, b.max_y),
            Point::new(b.center().x, b.min_y),
            Point::new(b.max_x, b.max_y),
        ]
    }
}

impl BoardItem for BlockItem {
    fn common(&self) -> &ItemCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ItemCommon {
        &mut self.common
    }

    fn bounds(&self) -> Bounds {
        let (w, h) = self.size();
        Bounds::centered(self.common.position, w, h)
    }

    fn contains_point(&self, p: Point, _tolerance: f64) -> bool {
        match self.shape {
            BlockShape::Rectangle => {
                let (w, h) = self.size();
                hit_axis_aligned_box(p, self.bounds().top_left(), w, h)
            }
            BlockShape::Circle => {
                let (w, h) = self.size();
                hit_circle(p, self.common.position, w.min(h) / 2.0)
            }
            BlockShape::Triangle => {
                let [a, b, c] = self.triangle_vertices();
                hit_triangle(p, a, b, c)
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.common.position = self.common.position.offset(dx, dy);
    }

    fn is_resizable(&self) -> bool {
        true
    }

    fn resize(&mut self, handle: ResizeHandle, pointer: Point, min_size: f64) {
        let (w, h) = resized_extent(handle, self.common.position, pointer, self.size(), min_size);
        self.width = Some(w);
        self.height = Some(h);
    }
}
