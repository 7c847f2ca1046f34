use std::f64::consts::PI;

use crate::foundation::core::{Point, Rect, non_negative};
use crate::geometry::trace::{ArcSweep, TracePath};

/// Exact circumference of a circle of radius `r`.
pub fn circle_perimeter(r: f64) -> f64 {
    2.0 * PI * r
}

/// Corner radius actually drawn for a `w x h` rectangle when `r` is requested.
///
/// Never exceeds half of either side, so neighbouring corner arcs cannot overlap.
pub fn safe_corner_radius(w: f64, h: f64, r: f64) -> f64 {
    non_negative(r.min(w / 2.0).min(h / 2.0))
}

/// Closed-form perimeter of a rounded rectangle.
pub fn rounded_rect_perimeter(w: f64, h: f64, r: f64) -> f64 {
    let safe_r = safe_corner_radius(w, h, r);
    2.0 * (w - 2.0 * safe_r) + 2.0 * (h - 2.0 * safe_r) + 2.0 * PI * safe_r
}

/// Trace a closed circle as two clockwise semicircles starting at its rightmost point.
///
/// A single arc command cannot describe a full turn, hence the split.
pub fn circle_path(path: &mut TracePath, center: Point, r: f64) {
    let right = Point::new(center.x + r, center.y);
    let left = Point::new(center.x - r, center.y);
    path.move_to(right);
    path.arc_to(r, true, ArcSweep::Clockwise, left);
    path.arc_to(r, true, ArcSweep::Clockwise, right);
    path.close();
}

/// Trace a closed rounded rectangle clockwise, starting where the top-left arc ends.
///
/// Returns the corner radius used.
pub fn rounded_rect_path(path: &mut TracePath, rect: Rect, r: f64) -> f64 {
    let rect = rect.abs();
    let r = safe_corner_radius(rect.width(), rect.height(), r);
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);

    path.move_to(Point::new(x0 + r, y0));
    path.line_to(Point::new(x1 - r, y0));
    path.arc_to(r, false, ArcSweep::Clockwise, Point::new(x1, y0 + r));
    path.line_to(Point::new(x1, y1 - r));
    path.arc_to(r, false, ArcSweep::Clockwise, Point::new(x1 - r, y1));
    path.line_to(Point::new(x0 + r, y1));
    path.arc_to(r, false, ArcSweep::Clockwise, Point::new(x0, y1 - r));
    path.line_to(Point::new(x0, y0 + r));
    path.arc_to(r, false, ArcSweep::Clockwise, Point::new(x0 + r, y0));
    path.close();
    r
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
