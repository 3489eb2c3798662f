//! Font lookup and text measurement.
//!
//! System fonts are discovered once through `fontdb` and loaded into
//! `rusttype` on first use. Loaded faces live for the rest of the process.
//! When no face matches, callers fall back to the fixed-advance estimate so
//! text items always get an extent.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point as rt_point, Font, Scale};
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};

use prancheta_settings::TextMeasurement;

/// Average glyph advance as a fraction of the font size.
const ESTIMATED_ADVANCE: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.2;

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
    italic: bool,
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Font database loaded with {} faces", db.len());
        db
    })
}

/// Best installed face for the requested style, if any.
pub fn get_font_for(family: &str, bold: bool, italic: bool) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey {
        family: family.to_string(),
        bold,
        italic,
    };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return *font;
    }

    let font_ref: Option<&'static Font<'static>> = match load_font_from_system(family, bold, italic)
    {
        Some(font) => Some(Box::leak(Box::new(font))),
        None => {
            tracing::warn!("No system font for family '{}', text uses estimates", family);
            None
        }
    };

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, font_ref);
    font_ref
}

fn load_font_from_system(family: &str, bold: bool, italic: bool) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" | "sans-serif" => vec![Family::SansSerif],
        "Serif" | "serif" => vec![Family::Serif],
        "Monospace" | "monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other), Family::SansSerif],
    };

    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: if italic { Style::Italic } else { Style::Normal },
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}

/// Text style parameters that affect the measured extent.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub family: &'a str,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

/// Computes the `(width, height)` a text item occupies.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: TextStyle<'_>) -> (f64, f64);
}

/// Fixed advance per character. Gives identical results everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasurer;

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, text: &str, style: TextStyle<'_>) -> (f64, f64) {
        let lines: Vec<&str> = text.lines().collect();
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let line_count = lines.len().max(1);
        let advance = if style.bold {
            ESTIMATED_ADVANCE * 1.1
        } else {
            ESTIMATED_ADVANCE
        };
        (
            longest as f64 * style.size * advance,
            line_count as f64 * style.size * LINE_HEIGHT,
        )
    }
}

/// Glyph advances from installed fonts, falling back to the estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFontMeasurer;

impl TextMeasurer for SystemFontMeasurer {
    fn measure(&self, text: &str, style: TextStyle<'_>) -> (f64, f64) {
        let Some(font) = get_font_for(style.family, style.bold, style.italic) else {
            return EstimatedMeasurer.measure(text, style);
        };
        let scale = Scale::uniform(style.size as f32);
        let width = text
            .lines()
            .map(|line| line_width(font, line, scale))
            .fold(0.0f64, f64::max);
        let line_count = text.lines().count().max(1);
        (width, line_count as f64 * style.size * LINE_HEIGHT)
    }
}

/// Advance width of one line of text.
pub fn line_width(font: &Font<'_>, line: &str, scale: Scale) -> f64 {
    font.layout(line, scale, rt_point(0.0, 0.0))
        .last()
        .map(|g| (g.position().x + g.unpositioned().h_metrics().advance_width) as f64)
        .unwrap_or(0.0)
}

/// Measurer selected by configuration.
pub fn measurer_for(mode: TextMeasurement) -> Box<dyn TextMeasurer> {
    match mode {
        TextMeasurement::Estimated => Box::new(EstimatedMeasurer),
        TextMeasurement::SystemFonts => Box::new(SystemFontMeasurer),
    }
}
