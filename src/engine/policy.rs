//! Padding and bleed sizing.
//!
//! Padding moves the traced boundary relative to the physical cutout (negative traces
//! inside it, positive outside). Bleed never touches the path; it only grows the
//! canvas so blur is not clipped at the canvas edge.

use crate::foundation::core::{MIN_TRACE_EXTENT, Point, Rect, non_negative};

/// Grow `rect` by `padding` on every side, never below the minimum traced extent.
pub(crate) fn padded_rect(rect: Rect, padding: f64) -> Rect {
    let grown = rect.abs().inflate(padding, padding);
    let center = grown.center();
    let half_w = grown.width().max(MIN_TRACE_EXTENT) / 2.0;
    let half_h = grown.height().max(MIN_TRACE_EXTENT) / 2.0;
    Rect::new(
        center.x - half_w,
        center.y - half_h,
        center.x + half_w,
        center.y + half_h,
    )
}

/// Circle enclosing `rect` (by its larger side), grown by `padding`.
pub(crate) fn orbit_circle(rect: Rect, padding: f64) -> (Point, f64) {
    let rect = rect.abs();
    let r = rect.width().max(rect.height()) / 2.0 + padding;
    (rect.center(), r.max(MIN_TRACE_EXTENT / 2.0))
}

/// Canvas around an isolated shape: its bounds plus `bleed`.
///
/// The origin is kept on screen (`>= 0`) unless the shape itself is off screen, in which
/// case the origin stops at the shape edge so the path stays inside the canvas.
pub(crate) fn orbit_canvas(shape: Rect, bleed: f64) -> Rect {
    let bled = shape.inflate(bleed, bleed);
    let x0 = bled.x0.max(0.0).min(shape.x0);
    let y0 = bled.y0.max(0.0).min(shape.y0);
    Rect::new(x0, y0, bled.x1, bled.y1)
}

/// Canvas for an edge bar: screen origin, full width, down to `lowest_y + bleed`.
pub(crate) fn bar_canvas(screen_width: f64, lowest_y: f64, bleed: f64) -> Rect {
    let height = (non_negative(lowest_y) + bleed).max(MIN_TRACE_EXTENT);
    Rect::new(0.0, 0.0, screen_width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/policy.rs"]
mod tests;
