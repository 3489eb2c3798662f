//! Mapping between device pointer coordinates and logical court units.
//!
//! The board has a fixed logical resolution. The host may display the
//! surface at any size, so pointer positions arrive in device pixels and are
//! scaled by the logical-to-displayed ratio on each axis. The renderer draws
//! logical units 1:1 onto the backing pixmap.

use prancheta_core::{FieldDimensions, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    logical_width: f64,
    logical_height: f64,
    display_width: f64,
    display_height: f64,
}

impl Viewport {
    /// Viewport displayed at its logical size.
    pub fn new(logical_width: f64, logical_height: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            display_width: logical_width,
            display_height: logical_height,
        }
    }

    pub fn from_field(field: FieldDimensions) -> Self {
        Self::new(field.width, field.height)
    }

    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Backing pixmap size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.logical_width.round().max(1.0) as u32,
            self.logical_height.round().max(1.0) as u32,
        )
    }

    /// Records the size at which the host currently displays the surface.
    /// Non-positive sizes are ignored.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.display_width = width;
            self.display_height = height;
        }
    }

    pub fn scale(&self) -> (f64, f64) {
        (
            self.logical_width / self.display_width,
            self.logical_height / self.display_height,
        )
    }

    /// Converts a pointer position relative to the displayed surface.
    pub fn device_to_logical(&self, x: f64, y: f64) -> Point {
        let (sx, sy) = self.scale();
        Point::new(x * sx, y * sy)
    }

    pub fn logical_to_device(&self, p: Point) -> (f64, f64) {
        let (sx, sy) = self.scale();
        (p.x / sx, p.y / sy)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.logical_width && p.y <= self.logical_height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_field(FieldDimensions::default())
    }
}
