//! Freehand stroke capture.
//!
//! The engine collects pointer samples while a stroke is in progress, keeps a
//! `lyon` preview path for the renderer, and on release reduces the samples
//! with [`simplify_path_indices`] before freezing them into a
//! [`DrawingPath`].

use lyon::math::point;
use lyon::path::Path;

use prancheta_core::geometry::{midpoint, simplify_path_indices};
use prancheta_core::Point;

use crate::model::DrawingPath;

/// One piece of a rendered stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeSegment {
    Line { from: Point, to: Point },
    Quadratic { from: Point, ctrl: Point, to: Point },
}

impl StrokeSegment {
    pub fn end(&self) -> Point {
        match self {
            StrokeSegment::Line { to, .. } | StrokeSegment::Quadratic { to, .. } => *to,
        }
    }
}

/// Segment joining sample `index - 1` to sample `index`.
///
/// With smoothing on and at least three samples, the segment is quadratic
/// with its control point at the midpoint of the two samples before `index`.
fn segment_to(points: &[Point], index: usize, smoothing: bool) -> StrokeSegment {
    let from = points[index - 1];
    let to = points[index];
    if smoothing && index >= 2 {
        StrokeSegment::Quadratic {
            from,
            ctrl: midpoint(points[index - 2], from),
            to,
        }
    } else {
        StrokeSegment::Line { from, to }
    }
}

/// Segments for a whole captured or stored stroke.
pub fn stroke_segments(points: &[Point], smoothing: bool) -> Vec<StrokeSegment> {
    (1..points.len())
        .map(|i| segment_to(points, i, smoothing))
        .collect()
}

/// Builds a `lyon` path from stroke segments.
pub fn build_path(start: Point, segments: &[StrokeSegment]) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(start.x as f32, start.y as f32));
    for segment in segments {
        match *segment {
            StrokeSegment::Line { to, .. } => {
                builder.line_to(point(to.x as f32, to.y as f32));
            }
            StrokeSegment::Quadratic { ctrl, to, .. } => {
                builder.quadratic_bezier_to(
                    point(ctrl.x as f32, ctrl.y as f32),
                    point(to.x as f32, to.y as f32),
                );
            }
        }
    }
    builder.end(false);
    builder.build()
}

#[derive(Debug, Clone)]
struct WorkingPath {
    points: Vec<Point>,
    widths: Vec<f64>,
    has_pressure: bool,
    color: String,
    thickness: f64,
    segments: Vec<StrokeSegment>,
}

#[derive(Debug, Clone)]
pub struct DrawingEngine {
    smoothing: bool,
    simplify_tolerance: f64,
    pressure_sensitive: bool,
    current: Option<WorkingPath>,
}

impl DrawingEngine {
    pub fn new(smoothing: bool, simplify_tolerance: f64, pressure_sensitive: bool) -> Self {
        Self {
            smoothing,
            simplify_tolerance,
            pressure_sensitive,
            current: None,
        }
    }

    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    fn sample_width(&self, thickness: f64, pressure: Option<f64>) -> (f64, bool) {
        match pressure {
            Some(p) if self.pressure_sensitive => (thickness * p.clamp(0.1, 1.0), true),
            _ => (thickness, false),
        }
    }

    /// Begins a stroke at `point`. Any unfinished stroke is discarded.
    pub fn start_drawing(
        &mut self,
        point: Point,
        color: &str,
        thickness: f64,
        pressure: Option<f64>,
    ) {
        let (width, has_pressure) = self.sample_width(thickness, pressure);
        self.current = Some(WorkingPath {
            points: vec![point],
            widths: vec![width],
            has_pressure,
            color: color.to_string(),
            thickness,
            segments: Vec::new(),
        });
    }

    /// Appends a sample and returns the segment to draw for it. Does nothing
    /// when no stroke is in progress.
    pub fn continue_drawing(&mut self, point: Point, pressure: Option<f64>) -> Option<StrokeSegment> {
        let thickness = self.current.as_ref()?.thickness;
        let (width, has_pressure) = self.sample_width(thickness, pressure);
        let smoothing = self.smoothing;

        let path = self.current.as_mut()?;
        path.points.push(point);
        path.widths.push(width);
        path.has_pressure |= has_pressure;

        let segment = segment_to(&path.points, path.points.len() - 1, smoothing);
        path.segments.push(segment);
        Some(segment)
    }

    /// Freezes the stroke, simplified, and clears the working state.
    pub fn finish_drawing(&mut self) -> Option<DrawingPath> {
        let path = self.current.take()?;
        if path.points.is_empty() {
            return None;
        }

        let kept = simplify_path_indices(&path.points, self.simplify_tolerance);
        let points: Vec<Point> = kept.iter().map(|&i| path.points[i]).collect();
        let widths = path
            .has_pressure
            .then(|| kept.iter().map(|&i| path.widths[i]).collect());

        tracing::debug!(
            "Stroke finished: {} samples, {} kept",
            path.points.len(),
            points.len()
        );

        Some(DrawingPath {
            points,
            color: path.color,
            thickness: path.thickness,
            timestamp: chrono::Utc::now().timestamp_millis(),
            widths,
        })
    }

    /// Drops the stroke in progress, if any.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Raw samples of the stroke in progress.
    pub fn current_points(&self) -> &[Point] {
        self.current
            .as_ref()
            .map(|p| p.points.as_slice())
            .unwrap_or_default()
    }

    /// Color and thickness of the stroke in progress.
    pub fn current_style(&self) -> Option<(&str, f64)> {
        self.current
            .as_ref()
            .map(|p| (p.color.as_str(), p.thickness))
    }

    /// Live preview of the stroke in progress.
    pub fn preview_path(&self) -> Option<Path> {
        let path = self.current.as_ref()?;
        let start = *path.points.first()?;
        Some(build_path(start, &path.segments))
    }
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::new(true, 1.5, true)
    }
}
