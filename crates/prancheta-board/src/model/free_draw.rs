use serde::{Deserialize, Serialize};

use prancheta_core::geometry::{bounding_box, distance, distance_to_segment};

use super::{BoardItem, Bounds, ItemCommon, Point};

/// One finished freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPath {
    pub points: Vec<Point>,
    pub color: String,
    pub thickness: f64,
    /// Milliseconds since the Unix epoch at which the stroke was finished.
    pub timestamp: i64,
    /// Per-point stroke width when the device reported pressure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<f64>>,
}

impl DrawingPath {
    fn is_near(&self, p: Point, tolerance: f64) -> bool {
        match self.points.as_slice() {
            [] => false,
            [only] => distance(p, *only) <= tolerance,
            points => points
                .windows(2)
                .any(|w| distance_to_segment(p, w[0], w[1]) <= tolerance),
        }
    }
}

/// Group of strokes drawn in one uninterrupted free-draw session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeDrawItem {
    #[serde(flatten)]
    pub common: ItemCommon,
    #[serde(default)]
    pub paths: Vec<DrawingPath>,
}

impl FreeDrawItem {
    /// Wraps a first stroke; the item is positioned at the stroke's center.
    pub fn from_path(path: DrawingPath) -> Self {
        let position = bounding_box(&path.points)
            .map(|(min, max)| Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0))
            .unwrap_or_default();
        let color = path.color.clone();
        Self {
            common: ItemCommon::new(position, color),
            paths: vec![path],
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.paths.iter().flat_map(|p| p.points.iter())
    }
}

impl BoardItem for FreeDrawItem {
    fn common(&self) -> &ItemCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ItemCommon {
        &mut self.common
    }

    fn bounds(&self) -> Bounds {
        let points: Vec<Point> = self.points().copied().collect();
        match bounding_box(&points) {
            Some((min, max)) => Bounds::new(min.x, min.y, max.x, max.y),
            None => Bounds::centered(self.common.position, 0.0, 0.0),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.paths.iter().any(|path| path.is_near(p, tolerance))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.common.position = self.common.position.offset(dx, dy);
        for path in &mut self.paths {
            for point in &mut path.points {
                *point = point.offset(dx, dy);
            }
        }
    }

    fn center(&self) -> Point {
        self.bounds().center()
    }
}
