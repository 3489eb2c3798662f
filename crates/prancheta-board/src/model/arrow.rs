use serde::{Deserialize, Serialize};

use prancheta_core::geometry::{distance_to_segment, midpoint};

use super::{BoardItem, Bounds, ItemCommon, Point};

/// Directed segment. `common.position` is the tail, `end_position` the head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowItem {
    #[serde(flatten)]
    pub common: ItemCommon,
    pub end_position: Point,
    pub thickness: f64,
}

impl ArrowItem {
    pub fn new(start: Point, end: Point, color: impl Into<String>, thickness: f64) -> Self {
        Self {
            common: ItemCommon::new(start, color),
            end_position: end,
            thickness,
        }
    }

    pub fn start(&self) -> Point {
        self.common.position
    }

    pub fn length(&self) -> f64 {
        self.start().distance_to(&self.end_position)
    }
}

impl BoardItem for ArrowItem {
    fn common(&self) -> &ItemCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ItemCommon {
        &mut self.common
    }

    fn bounds(&self) -> Bounds {
        let (a, b) = (self.start(), self.end_position);
        Bounds::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        distance_to_segment(p, self.start(), self.end_position) <= tolerance
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.common.position = self.common.position.offset(dx, dy);
        self.end_position = self.end_position.offset(dx, dy);
    }

    fn center(&self) -> Point {
        midpoint(self.start(), self.end_position)
    }
}
