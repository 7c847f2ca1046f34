use crate::foundation::core::{FillRule, Point, Size};
use crate::geometry::notch_bar::Bar;
use crate::geometry::trace::TracePath;

/// Glow-admission region paired with its fill rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    /// Path data in canvas-local coordinates.
    pub d: String,
    /// How the subpaths combine.
    pub fill_rule: FillRule,
}

/// Region below a bar, down to the canvas bottom.
///
/// The bar is traced again, dropped straight down from its last point, run back under
/// its first point, and closed.
pub fn bar_mask(bar: &Bar, canvas_height: f64) -> Mask {
    let mut path = TracePath::new();
    bar.trace(&mut path);
    if let (Some(first), Some(last)) = (path.first_point(), path.current_point()) {
        path.line_to(Point::new(last.x, canvas_height));
        path.line_to(Point::new(first.x, canvas_height));
        path.close();
    }
    let (d, _) = path.finish();
    Mask {
        d,
        fill_rule: FillRule::NonZero,
    }
}

/// Whole canvas minus the traced shape.
///
/// `shape_d` must already be local to the same canvas.
pub fn orbit_mask(canvas: Size, shape_d: &str) -> Mask {
    let mut path = TracePath::new();
    path.move_to(Point::ORIGIN);
    path.line_to(Point::new(canvas.width, 0.0));
    path.line_to(Point::new(canvas.width, canvas.height));
    path.line_to(Point::new(0.0, canvas.height));
    path.close();
    path.append_raw(shape_d);
    let (d, _) = path.finish();
    Mask {
        d,
        fill_rule: FillRule::EvenOdd,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
