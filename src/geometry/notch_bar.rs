use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{Point, Rect, non_negative};
use crate::geometry::trace::{ArcSweep, TracePath};

/// Edge-attached beam: an open line along the top of the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bar {
    /// No cutout: one straight line at `base_y`.
    Straight {
        /// Full usable width.
        screen_width: f64,
        /// Resting height of the line.
        base_y: f64,
    },
    /// Line that detours down around a notch.
    Notched(NotchBar),
}

impl Bar {
    /// Straight bar at `y = padding`.
    pub fn straight(screen_width: f64, padding: f64) -> Self {
        Self::Straight {
            screen_width,
            base_y: padding,
        }
    }

    /// Lowest y reached by the traced line.
    pub fn lowest_y(&self) -> f64 {
        match self {
            Self::Straight { base_y, .. } => *base_y,
            Self::Notched(n) => n.bottom(),
        }
    }

    /// Trace the bar, left to right.
    pub fn trace(&self, path: &mut TracePath) {
        match self {
            Self::Straight {
                screen_width,
                base_y,
            } => {
                path.move_to(Point::new(0.0, *base_y));
                path.line_to(Point::new(*screen_width, *base_y));
            }
            Self::Notched(n) => n.trace(path),
        }
    }

    /// Closed-form length of [`Bar::trace`].
    pub fn perimeter(&self) -> f64 {
        match self {
            Self::Straight { screen_width, .. } => non_negative(*screen_width),
            Self::Notched(n) => n.perimeter(),
        }
    }
}

/// Clamped geometry of a bar that detours around a notch.
///
/// All fields are final: the path and its perimeter are both derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchBar {
    /// Full usable width; the bar runs from `x = 0` to here.
    pub screen_width: f64,
    /// Resting height of the bar.
    pub base_y: f64,
    /// Left wall of the detour.
    pub left: f64,
    /// Right wall of the detour.
    pub right: f64,
    /// Detour depth below `base_y`.
    pub depth: f64,
    /// Radius shared by the four transition corners.
    pub radius: f64,
}

impl NotchBar {
    /// Pad and clamp a physical notch.
    ///
    /// Walls move out by `padding` and the resting line sits at `y = padding`. The detour
    /// hangs `notch.y1 + padding` below that line, so its bottom clears the notch by
    /// `2 * padding`. Crossing walls are swapped and both are kept on screen.
    pub fn new(screen_width: f64, notch: Rect, radius: Option<f64>, padding: f64) -> Self {
        let w = non_negative(screen_width);
        let a = notch.x0 - padding;
        let b = notch.x1 + padding;
        let left = a.min(b).clamp(0.0, w);
        let right = a.max(b).clamp(0.0, w);
        let depth = non_negative(notch.y1 + padding);
        let pad_w = right - left;
        let r = non_negative(
            (radius.unwrap_or(0.0) + padding)
                .min(pad_w / 2.0)
                .min(depth / 2.0),
        );
        Self {
            screen_width: w,
            base_y: padding,
            left,
            right,
            depth,
            radius: r,
        }
    }

    /// Lowest y of the detour.
    pub fn bottom(&self) -> f64 {
        self.base_y + self.depth
    }

    /// Whether the bar enters the detour from the left screen edge.
    pub fn has_run_in(&self) -> bool {
        self.left > 0.0
    }

    /// Whether the bar leaves the detour towards the right screen edge.
    pub fn has_run_out(&self) -> bool {
        self.right < self.screen_width
    }

    /// Radius of the entry corner, shrunk to the room left of the wall.
    pub fn entry_radius(&self) -> f64 {
        self.radius.min(self.left)
    }

    /// Radius of the exit corner, shrunk to the room right of the wall.
    pub fn exit_radius(&self) -> f64 {
        self.radius.min(self.screen_width - self.right)
    }

    /// Trace left to right. Starts at the left wall when it sits on the screen edge.
    pub fn trace(&self, path: &mut TracePath) {
        let (b, r, bottom) = (self.base_y, self.radius, self.bottom());
        let (left, right) = (self.left, self.right);

        if self.has_run_in() {
            let ri = self.entry_radius();
            path.move_to(Point::new(0.0, b));
            if left > ri {
                path.line_to(Point::new(left - ri, b));
            }
            path.arc_to(ri, false, ArcSweep::Clockwise, Point::new(left, b + ri));
        } else {
            path.move_to(Point::new(left, b));
        }

        path.line_to(Point::new(left, bottom - r));
        path.arc_to(r, false, ArcSweep::CounterClockwise, Point::new(left + r, bottom));
        path.line_to(Point::new(right - r, bottom));
        path.arc_to(r, false, ArcSweep::CounterClockwise, Point::new(right, bottom - r));

        if self.has_run_out() {
            let ro = self.exit_radius();
            path.line_to(Point::new(right, b + ro));
            path.arc_to(ro, false, ArcSweep::Clockwise, Point::new(right + ro, b));
            if right + ro < self.screen_width {
                path.line_to(Point::new(self.screen_width, b));
            }
        } else {
            path.line_to(Point::new(right, b));
        }
    }

    /// Sum of runs, walls, bottom edge and quarter arcs.
    pub fn perimeter(&self) -> f64 {
        let r = self.radius;
        let quarter = FRAC_PI_2 * r;
        let mut total = (self.right - self.left - 2.0 * r) + 2.0 * quarter;

        if self.has_run_in() {
            let ri = self.entry_radius();
            total += (self.left - ri) + FRAC_PI_2 * ri + (self.depth - r - ri);
        } else {
            total += self.depth - r;
        }
        if self.has_run_out() {
            let ro = self.exit_radius();
            total +=
                (self.screen_width - self.right - ro) + FRAC_PI_2 * ro + (self.depth - r - ro);
        } else {
            total += self.depth - r;
        }
        total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/notch_bar.rs"]
mod tests;
