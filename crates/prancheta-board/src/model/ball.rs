use serde::{Deserialize, Serialize};

use prancheta_core::geometry::hit_circle;

use super::{resized_extent, BoardItem, Bounds, ItemCommon, Point};
use crate::interaction::ResizeHandle;

pub const DEFAULT_BALL_SIZE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallItem {
    #[serde(flatten)]
    pub common: ItemCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl BallItem {
    pub fn new(position: Point, color: impl Into<String>, size: f64) -> Self {
        Self {
            common: ItemCommon::new(position, color),
            width: Some(size),
            height: Some(size),
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_BALL_SIZE),
            self.height.unwrap_or(DEFAULT_BALL_SIZE),
        )
    }

    pub fn radius(&self) -> f64 {
        let (w, h) = self.size();
        w.min(h) / 2.0
    }
}

impl BoardItem for BallItem {
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
