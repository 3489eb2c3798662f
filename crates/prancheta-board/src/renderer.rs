//! Raster renderer for the tactical board.
//!
//! Draws a scene onto a `tiny-skia` pixmap at the viewport's logical size:
//! court background and guide lines, items in paint order, then selection
//! decorations and any in-flight gesture preview. Rendering reads the scene
//! and never changes it.

use image::{Rgb, RgbImage};
use lyon::path::{Path as LyonPath, PathEvent};
use rusttype::{point as rt_point, Scale};
use std::f64::consts::PI;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke,
    StrokeDash, Transform,
};

use prancheta_core::constants::DEFAULT_BACKGROUND_COLOR;
use prancheta_core::{Point, Rgba};
use prancheta_settings::EditorConfig;

use crate::drawing::{build_path, stroke_segments, StrokeSegment};
use crate::font_manager;
use crate::interaction::ResizeHandle;
use crate::model::{
    ArrowItem, BallItem, BlockItem, BlockShape, BoardItem, Bounds, DrawingPath, FreeDrawItem, Item,
    PlayerItem, TextAlignment, TextItem,
};
use crate::scene::Scene;
use crate::viewport::Viewport;

const COURT_MARGIN: f32 = 10.0;
const ARROW_HEAD_ANGLE: f64 = PI / 6.0;
const ARROW_HEAD_LENGTH: f64 = 12.0;

fn court_line_color() -> Color {
    Color::from_rgba8(255, 255, 255, 200)
}
fn selection_color() -> Color {
    Color::from_rgba8(33, 150, 243, 255)
}

/// Presentation settings that do not live in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub background_color: String,
    pub show_court_lines: bool,
    pub handle_size: f64,
    pub edge_handles: bool,
    pub smoothing: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            show_court_lines: true,
            handle_size: 8.0,
            edge_handles: false,
            smoothing: true,
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            background_color: config.canvas.background_color.clone(),
            show_court_lines: config.canvas.show_court_lines,
            handle_size: config.interaction.handle_size,
            edge_handles: config.interaction.edge_handles,
            smoothing: config.drawing.smoothing,
        }
    }
}

/// Gesture feedback drawn over the scene.
#[derive(Debug, Clone)]
pub enum Preview {
    Arrow {
        start: Point,
        end: Point,
        color: String,
        thickness: f64,
    },
    Stroke {
        path: LyonPath,
        color: String,
        thickness: f64,
    },
}

/// Renders with default options. `None` only if the pixmap cannot be
/// allocated.
pub fn render(scene: &Scene, viewport: &Viewport) -> Option<Pixmap> {
    render_with_preview(scene, viewport, &RenderOptions::default(), None)
}

pub fn render_with_preview(
    scene: &Scene,
    viewport: &Viewport,
    options: &RenderOptions,
    preview: Option<&Preview>,
) -> Option<Pixmap> {
    let (width, height) = viewport.pixel_size();
    let mut pixmap = Pixmap::new(width, height)?;

    pixmap.fill(parse_color(&options.background_color, Rgba::rgb(46, 125, 50)));
    if options.show_court_lines {
        draw_court(&mut pixmap, width as f32, height as f32);
    }

    for item in scene.iter() {
        draw_item(&mut pixmap, item, options);
    }

    for item in scene.iter().filter(|i| i.is_selected()) {
        draw_selection(&mut pixmap, item, options);
    }

    match preview {
        Some(Preview::Arrow {
            start,
            end,
            color,
            thickness,
        }) => draw_arrow_shape(&mut pixmap, *start, *end, color, *thickness),
        Some(Preview::Stroke {
            path,
            color,
            thickness,
        }) => {
            if let Some(path) = lyon_to_skia(path) {
                let paint = paint_for(parse_color(color, Rgba::BLACK));
                pixmap.stroke_path(
                    &path,
                    &paint,
                    &round_stroke(*thickness as f32),
                    Transform::identity(),
                    None,
                );
            }
        }
        None => {}
    }

    Some(pixmap)
}

/// Renders and flattens to an opaque RGB image.
pub fn render_to_image(scene: &Scene, viewport: &Viewport, options: &RenderOptions) -> RgbImage {
    let (width, height) = viewport.pixel_size();
    let Some(pixmap) = render_with_preview(scene, viewport, options, None) else {
        return RgbImage::new(width, height);
    };
    pixmap_to_image(&pixmap)
}

pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgb([c.red(), c.green(), c.blue()])
    })
}

/// Parses a hex color, logging and substituting `fallback` when invalid.
fn parse_color(value: &str, fallback: Rgba) -> Color {
    to_skia(Rgba::parse_or(value, fallback))
}

fn to_skia(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

fn circle(center: Point, radius: f64) -> Option<Path> {
    PathBuilder::from_circle(center.x as f32, center.y as f32, radius.max(0.5) as f32)
}

fn rect(b: &Bounds) -> Option<Path> {
    Rect::from_ltrb(b.min_x as f32, b.min_y as f32, b.max_x as f32, b.max_y as f32)
        .map(PathBuilder::from_rect)
}

fn polygon(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

/// Converts a `lyon` path into a `tiny-skia` path.
fn lyon_to_skia(path: &LyonPath) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            PathEvent::Begin { at } => pb.move_to(at.x, at.y),
            PathEvent::Line { to, .. } => pb.line_to(to.x, to.y),
            PathEvent::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            PathEvent::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

fn draw_court(pixmap: &mut Pixmap, w: f32, h: f32) {
    let paint = paint_for(court_line_color());
    let stroke = Stroke {
        width: 2.0,
        ..Default::default()
    };
    let m = COURT_MARGIN;
    let inner_w = w - 2.0 * m;
    let inner_h = h - 2.0 * m;
    if inner_w <= 0.0 || inner_h <= 0.0 {
        return;
    }

    let mut pb = PathBuilder::new();
    if let Some(outline) = Rect::from_xywh(m, m, inner_w, inner_h) {
        pb.push_rect(outline);
    }
    pb.move_to(m, h / 2.0);
    pb.line_to(w - m, h / 2.0);

    let goal_w = inner_w * 0.4;
    let goal_d = inner_h * 0.12;
    let goal_x = (w - goal_w) / 2.0;
    if let Some(top) = Rect::from_xywh(goal_x, m, goal_w, goal_d) {
        pb.push_rect(top);
    }
    if let Some(bottom) = Rect::from_xywh(goal_x, h - m - goal_d, goal_w, goal_d) {
        pb.push_rect(bottom);
    }
    pb.push_circle(w / 2.0, h / 2.0, inner_w.min(inner_h) * 0.12);

    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
    if let Some(spot) = PathBuilder::from_circle(w / 2.0, h / 2.0, 3.0) {
        pixmap.fill_path(&spot, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn draw_item(pixmap: &mut Pixmap, item: &Item, options: &RenderOptions) {
    match item {
        Item::PlayerBlue(p) | Item::PlayerRed(p) => draw_player(pixmap, p),
        Item::Ball(b) => draw_ball(pixmap, b),
        Item::Block(b) => draw_block(pixmap, b),
        Item::Text(t) => draw_text_item(pixmap, t),
        Item::Arrow(a) => draw_arrow(pixmap, a),
        Item::FreeDraw(f) => draw_free_draw(pixmap, f, options.smoothing),
    }
}

fn draw_player(pixmap: &mut Pixmap, player: &PlayerItem) {
    let Some(disc) = circle(player.common.position, player.radius()) else {
        return;
    };
    let fill = paint_for(parse_color(&player.common.color, Rgba::BLACK));
    pixmap.fill_path(&disc, &fill, FillRule::Winding, Transform::identity(), None);
    let outline = paint_for(to_skia(Rgba::WHITE));
    pixmap.stroke_path(
        &disc,
        &outline,
        &Stroke {
            width: 2.0,
            ..Default::default()
        },
        Transform::identity(),
        None,
    );

    if let Some(number) = player.number {
        let size = player.radius() * 1.1;
        let label = number.to_string();
        let style = font_manager::TextStyle {
            family: "Sans",
            size,
            bold: true,
            italic: false,
        };
        let c = player.common.position;
        draw_label(pixmap, &label, style, c, Rgba::WHITE, 1.0);
    }
}

fn draw_ball(pixmap: &mut Pixmap, ball: &BallItem) {
    let Some(disc) = circle(ball.common.position, ball.radius()) else {
        return;
    };
    let fill = paint_for(parse_color(&ball.common.color, Rgba::WHITE));
    pixmap.fill_path(&disc, &fill, FillRule::Winding, Transform::identity(), None);
    let outline = paint_for(to_skia(Rgba::BLACK));
    pixmap.stroke_path(
        &disc,
        &outline,
        &Stroke {
            width: 1.5,
            ..Default::default()
        },
        Transform::identity(),
        None,
    );
}

fn draw_block(pixmap: &mut Pixmap, block: &BlockItem) {
    let path = match block.shape {
        BlockShape::Rectangle => rect(&block.bounds()),
        BlockShape::Triangle => polygon(&block.triangle_vertices()),
        BlockShape::Circle => {
            let (w, h) = block.size();
            circle(block.common.position, w.min(h) / 2.0)
        }
    };
    if let Some(path) = path {
        let fill = paint_for(parse_color(&block.common.color, Rgba::BLACK));
        pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
    }
}

fn draw_text_item(pixmap: &mut Pixmap, text: &TextItem) {
    let bounds = text.bounds();
    let opacity = text.opacity.clamp(0.0, 1.0);

    if let Some(background) = &text.background_color {
        let bg = Rgba::parse_or(background, Rgba::WHITE).with_opacity(opacity);
        if let Some(path) = rect(&bounds) {
            pixmap.fill_path(
                &path,
                &paint_for(to_skia(bg)),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    let Some(font) = font_manager::get_font_for(&text.font_family, text.bold, text.italic) else {
        return;
    };
    let color = Rgba::parse_or(&text.common.color, Rgba::BLACK);
    let scale = Scale::uniform(text.font_size as f32);
    let line_height = text.font_size * 1.2;

    for (row, line) in text.text.lines().enumerate() {
        let line_w = font_manager::line_width(font, line, scale);
        let x = match text.alignment {
            TextAlignment::Left => bounds.min_x,
            TextAlignment::Center => bounds.center().x - line_w / 2.0,
            TextAlignment::Right => bounds.max_x - line_w,
        };
        let top = bounds.min_y + row as f64 * line_height;
        draw_glyphs(pixmap, font, line, scale, x, top, color, opacity);
    }
}

/// Draws one line of text centered on `center`.
fn draw_label(
    pixmap: &mut Pixmap,
    label: &str,
    style: font_manager::TextStyle<'_>,
    center: Point,
    color: Rgba,
    opacity: f64,
) {
    let Some(font) = font_manager::get_font_for(style.family, style.bold, style.italic) else {
        return;
    };
    let scale = Scale::uniform(style.size as f32);
    let v = font.v_metrics(scale);
    let line_w = font_manager::line_width(font, label, scale);
    let glyph_h = (v.ascent - v.descent) as f64;
    draw_glyphs(
        pixmap,
        font,
        label,
        scale,
        center.x - line_w / 2.0,
        center.y - glyph_h / 2.0,
        color,
        opacity,
    );
}

/// Rasterizes glyph coverage onto the premultiplied pixmap with source-over
/// blending. `top` is the top of the line box.
#[allow(clippy::too_many_arguments)]
fn draw_glyphs(
    pixmap: &mut Pixmap,
    font: &rusttype::Font<'static>,
    line: &str,
    scale: Scale,
    x: f64,
    top: f64,
    color: Rgba,
    opacity: f64,
) {
    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(x as f32, top as f32 + v_metrics.ascent);
    let base_alpha = color.a as f32 / 255.0 * opacity as f32;
    let data = pixmap.data_mut();

    for glyph in font.layout(line, scale, start) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let sa = coverage * base_alpha;
            if sa <= 0.0 {
                return;
            }
            let idx = ((py * width + px) * 4) as usize;
            let pixel = &mut data[idx..idx + 4];
            let src = [color.r, color.g, color.b];
            for ch in 0..3 {
                let blended = src[ch] as f32 * sa + pixel[ch] as f32 * (1.0 - sa);
                pixel[ch] = blended.round().min(255.0) as u8;
            }
            pixel[3] = (255.0 * sa + pixel[3] as f32 * (1.0 - sa)).round().min(255.0) as u8;
        });
    }
}

fn draw_arrow(pixmap: &mut Pixmap, arrow: &ArrowItem) {
    draw_arrow_shape(
        pixmap,
        arrow.start(),
        arrow.end_position,
        &arrow.common.color,
        arrow.thickness,
    );
}

fn draw_arrow_shape(pixmap: &mut Pixmap, start: Point, end: Point, color: &str, thickness: f64) {
    let paint = paint_for(parse_color(color, Rgba::BLACK));
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.hypot(dy) < f64::EPSILON {
        if let Some(dot) = circle(start, thickness.max(2.0)) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(start.x as f32, start.y as f32);
    pb.line_to(end.x as f32, end.y as f32);
    if let Some(shaft) = pb.finish() {
        pixmap.stroke_path(
            &shaft,
            &paint,
            &round_stroke(thickness as f32),
            Transform::identity(),
            None,
        );
    }

    let angle = dy.atan2(dx);
    let head_len = ARROW_HEAD_LENGTH + thickness * 2.0;
    let wing = |a: f64| Point::new(end.x - head_len * a.cos(), end.y - head_len * a.sin());
    let head = [
        end,
        wing(angle - ARROW_HEAD_ANGLE),
        wing(angle + ARROW_HEAD_ANGLE),
    ];
    if let Some(path) = polygon(&head) {
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn draw_free_draw(pixmap: &mut Pixmap, item: &FreeDrawItem, smoothing: bool) {
    for path in &item.paths {
        draw_stroke(pixmap, path, smoothing);
    }
}

fn draw_stroke(pixmap: &mut Pixmap, path: &DrawingPath, smoothing: bool) {
    let paint = paint_for(parse_color(&path.color, Rgba::BLACK));
    let Some(&first) = path.points.first() else {
        return;
    };

    if path.points.len() == 1 {
        if let Some(dot) = circle(first, path.thickness / 2.0) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let segments = stroke_segments(&path.points, smoothing);
    match &path.widths {
        Some(widths) if widths.len() == path.points.len() => {
            // Variable width: one stroke per segment at the mean of its ends.
            for (i, segment) in segments.iter().enumerate() {
                let start = match segment {
                    StrokeSegment::Line { from, .. } | StrokeSegment::Quadratic { from, .. } => {
                        *from
                    }
                };
                let width = (widths[i] + widths[i + 1]) / 2.0;
                if let Some(p) = lyon_to_skia(&build_path(start, std::slice::from_ref(segment))) {
                    pixmap.stroke_path(
                        &p,
                        &paint,
                        &round_stroke(width as f32),
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
        _ => {
            if let Some(p) = lyon_to_skia(&build_path(first, &segments)) {
                pixmap.stroke_path(
                    &p,
                    &paint,
                    &round_stroke(path.thickness as f32),
                    Transform::identity(),
                    None,
                );
            }
        }
    }
}

fn draw_selection(pixmap: &mut Pixmap, item: &Item, options: &RenderOptions) {
    let bounds = item.bounds().inflate(2.0);
    let paint = paint_for(selection_color());

    if let Some(path) = rect(&bounds) {
        let stroke = Stroke {
            width: 1.5,
            dash: StrokeDash::new(vec![5.0, 4.0], 0.0),
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    if !item.is_resizable() {
        return;
    }
    let handle_bounds = item.bounds();
    let white = paint_for(to_skia(Rgba::WHITE));
    for handle in ResizeHandle::available(options.edge_handles) {
        let a = handle.anchor(&handle_bounds);
        let square = Bounds::centered(a, options.handle_size, options.handle_size);
        if let Some(path) = rect(&square) {
            pixmap.fill_path(&path, &white, FillRule::Winding, Transform::identity(), None);
            pixmap.stroke_path(
                &path,
                &paint,
                &Stroke {
                    width: 1.0,
                    ..Default::default()
                },
                Transform::identity(),
                None,
            );
        }
    }
}
