use serde::{Deserialize, Serialize};

use prancheta_core::geometry::hit_axis_aligned_box;

use super::{BoardItem, Bounds, ItemCommon, Point};

/// Extent used when a text item has never been measured.
pub const DEFAULT_TEXT_WIDTH: f64 = 100.0;
pub const DEFAULT_TEXT_HEIGHT: f64 = 24.0;

fn default_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Free text annotation. The box is centered on `position`; `width` and
/// `height` hold the last measured extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    #[serde(flatten)]
    pub common: ItemCommon,
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub alignment: TextAlignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl TextItem {
    pub fn new(
        position: Point,
        color: impl Into<String>,
        text: impl Into<String>,
        font_size: f64,
        font_family: impl Into<String>,
    ) -> Self {
        Self {
            common: ItemCommon::new(position, color),
            text: text.into(),
            font_size,
            font_family: font_family.into(),
            bold: false,
            italic: false,
            alignment: TextAlignment::default(),
            background_color: None,
            opacity: 1.0,
            width: None,
            height: None,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_TEXT_WIDTH),
            self.height.unwrap_or(DEFAULT_TEXT_HEIGHT),
        )
    }

    /// Applies the fields set in `patch`. Returns true if anything changed.
    pub fn apply(&mut self, patch: &TextPatch) -> bool {
        let before = self.clone();
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(bold) = patch.bold {
            self.bold = bold;
        }
        if let Some(italic) = patch.italic {
            self.italic = italic;
        }
        if let Some(alignment) = patch.alignment {
            self.alignment = alignment;
        }
        if let Some(background) = &patch.background_color {
            self.background_color = background.clone();
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(color) = &patch.color {
            self.common.color = color.clone();
        }
        *self != before
    }
}

/// Edited fields returned by the host's text dialog. `None` leaves a field
/// untouched; `background_color: Some(None)` removes the background.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPatch {
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub alignment: Option<TextAlignment>,
    pub background_color: Option<Option<String>>,
    pub opacity: Option<f64>,
    pub color: Option<String>,
}

impl TextPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

impl BoardItem for TextItem {
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
        let (w, h) = self.size();
        hit_axis_aligned_box(p, self.bounds().top_left(), w, h)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.common.position = self.common.position.offset(dx, dy);
    }
}
