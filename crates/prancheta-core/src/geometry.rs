//! Geometry kernel.
//!
//! Pure functions used for hit-testing and freehand path reduction. None of
//! them allocate except the simplification helpers, and none of them fail:
//! degenerate input (zero-length segments, collinear triangles) has a defined
//! answer.

use crate::types::Point;

/// Euclidean distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance_to(&q)
}

/// Midpoint of the segment `[a, b]`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Returns true when `p` lies inside or on the circle.
pub fn hit_circle(p: Point, center: Point, radius: f64) -> bool {
    distance(p, center) <= radius
}

/// Inclusive axis-aligned box test.
pub fn hit_axis_aligned_box(p: Point, top_left: Point, width: f64, height: f64) -> bool {
    p.x >= top_left.x
        && p.x <= top_left.x + width
        && p.y >= top_left.y
        && p.y <= top_left.y + height
}

fn cross(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Point-in-triangle via the signs of the three edge cross products.
///
/// Points on an edge count as inside. A collinear triangle has no interior,
/// so only points on its edges hit.
pub fn hit_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let area2 = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
    if area2.abs() < f64::EPSILON {
        let on_edge = |s: Point, e: Point| distance_to_segment(p, s, e) <= f64::EPSILON;
        return on_edge(a, b) || on_edge(b, c) || on_edge(c, a);
    }

    let d1 = cross(p, a, b);
    let d2 = cross(p, b, c);
    let d3 = cross(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Distance from `p` to the closest point of the segment `[a, b]`.
///
/// The projection parameter is clamped to `[0, 1]`; a zero-length segment
/// degrades to the distance to `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let l2 = dx * dx + dy * dy;
    if l2 == 0.0 {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / l2).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}

/// Distance from `p` to the infinite line through `a` and `b`.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return distance(p, a);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / len
}

/// Indices of the points kept by [`simplify_path`].
///
/// Single pass: the first and last points always survive, and each interior
/// point survives only if it deviates more than `tolerance` from the line
/// through its immediate neighbors in the input. Survivors are not re-tested
/// against wider spans, so this under-simplifies compared to recursive
/// Douglas–Peucker. Saved boards depend on this exact output.
pub fn simplify_path_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    for i in 1..n - 1 {
        if perpendicular_distance(points[i], points[i - 1], points[i + 1]) > tolerance {
            kept.push(i);
        }
    }
    kept.push(n - 1);
    kept
}

/// Reduces a captured pointer trail. See [`simplify_path_indices`].
pub fn simplify_path(points: &[Point], tolerance: f64) -> Vec<Point> {
    simplify_path_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Axis-aligned bounds `(min, max)` of a point set, or `None` when empty.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;
    let init = (*first, *first);
    Some(points.iter().skip(1).fold(init, |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}
