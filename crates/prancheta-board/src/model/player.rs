use serde::{Deserialize, Serialize};

use prancheta_core::geometry::hit_circle;

use super::{resized_extent, BoardItem, Bounds, ItemCommon, Point};
use crate::interaction::ResizeHandle;

/// Size used when a player has no stored width/height.
pub const DEFAULT_PLAYER_SIZE: f64 = 30.0;

/// Side a player belongs to. Encoded in the item's `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Blue,
    Red,
}

/// A player token, drawn as a filled disc with an optional jersey number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    #[serde(flatten)]
    pub common: ItemCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PlayerItem {
    pub fn new(position: Point, color: impl Into<String>, size: f64) -> Self {
        Self {
            common: ItemCommon::new(position, color),
            number: None,
            width: Some(size),
            height: Some(size),
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_PLAYER_SIZE),
            self.height.unwrap_or(DEFAULT_PLAYER_SIZE),
        )
    }

    pub fn radius(&self) -> f64 {
        let (w, h) = self.size();
        w.min(h) / 2.0
    }
}

impl BoardItem for PlayerItem {
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
        hit_circle(p, self.common.position, self.radius())
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
