use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::format::Num;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Direction an arc turns in screen space (y grows downward).
pub enum ArcSweep {
    /// Positive-angle direction, SVG sweep flag `1`.
    Clockwise,
    /// Negative-angle direction, SVG sweep flag `0`.
    CounterClockwise,
}

impl ArcSweep {
    fn flag(self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => 0,
        }
    }
}

/// Path-data writer that measures what it writes.
///
/// Points are given in absolute coordinates and emitted relative to `origin`. Every
/// segment adds its exact arc length, so the perimeter reported for a path is derived
/// from the very same numbers as its data.
#[derive(Clone, Debug)]
pub struct TracePath {
    origin: Vec2,
    d: String,
    length: f64,
    first: Option<Point>,
    current: Option<Point>,
    subpath_start: Option<Point>,
}

impl Default for TracePath {
    fn default() -> Self {
        Self::new()
    }
}

impl TracePath {
    /// Writer emitting absolute coordinates.
    pub fn new() -> Self {
        Self::with_origin(Point::ORIGIN)
    }

    /// Writer emitting coordinates relative to `origin`.
    pub fn with_origin(origin: Point) -> Self {
        Self {
            origin: origin.to_vec2(),
            d: String::new(),
            length: 0.0,
            first: None,
            current: None,
            subpath_start: None,
        }
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.push_cmd('M');
        self.push_point(p);
        if self.first.is_none() {
            self.first = Some(p);
        }
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    /// Straight segment to `p`.
    pub fn line_to(&mut self, p: Point) {
        let from = self.current_or_move(p);
        self.push_cmd('L');
        self.push_point(p);
        self.length += from.distance(p);
        self.current = Some(p);
    }

    /// Circular arc of `radius` to `p`.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: ArcSweep, p: Point) {
        let from = self.current_or_move(p);
        self.push_cmd('A');
        let _ = write!(
            self.d,
            "{},{} 0 {},{} ",
            Num(radius),
            Num(radius),
            u8::from(large_arc),
            sweep.flag()
        );
        self.push_point(p);
        self.length += circular_arc_length(radius, from.distance(p), large_arc);
        self.current = Some(p);
    }

    /// Close the current subpath back to where it started.
    pub fn close(&mut self) {
        let (Some(current), Some(start)) = (self.current, self.subpath_start) else {
            return;
        };
        self.push_cmd('Z');
        self.length += current.distance(start);
        self.current = Some(start);
    }

    /// Append raw, already-local path data as its own subpath group.
    ///
    /// Length and endpoints are left untouched; used to stack mask subpaths.
    pub(crate) fn append_raw(&mut self, d: &str) {
        if d.is_empty() {
            return;
        }
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push_str(d);
    }

    /// Total arc length written so far.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// First point ever moved to (absolute).
    pub fn first_point(&self) -> Option<Point> {
        self.first
    }

    /// Current pen position (absolute).
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Path data written so far.
    pub fn as_str(&self) -> &str {
        &self.d
    }

    /// Consume into `(path data, length)`.
    pub fn finish(self) -> (String, f64) {
        (self.d, self.length)
    }

    fn current_or_move(&mut self, p: Point) -> Point {
        match self.current {
            Some(c) => c,
            None => {
                self.move_to(p);
                p
            }
        }
    }

    fn push_cmd(&mut self, cmd: char) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push(cmd);
        if cmd != 'Z' {
            self.d.push(' ');
        }
    }

    fn push_point(&mut self, p: Point) {
        let local = p - self.origin;
        let _ = write!(self.d, "{},{}", Num(local.x), Num(local.y));
    }
}

const SEMICIRCLE_EPS: f64 = 1e-9;

/// Length of a circular arc of `radius` spanning a chord of length `chord`.
///
/// Radii too small for the chord are scaled up to a semicircle, as SVG renderers do.
/// A non-positive radius draws a straight line.
pub fn circular_arc_length(radius: f64, chord: f64, large_arc: bool) -> f64 {
    if radius <= 0.0 || chord <= 0.0 {
        return chord.max(0.0);
    }
    // Near-diameter chords are semicircles; asin is ill-conditioned there.
    if chord >= 2.0 * radius * (1.0 - SEMICIRCLE_EPS) {
        return PI * chord.max(2.0 * radius) / 2.0;
    }
    let half_angle = (chord / (2.0 * radius)).asin();
    let theta = if large_arc {
        2.0 * PI - 2.0 * half_angle
    } else {
        2.0 * half_angle
    };
    radius * theta
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/trace.rs"]
mod tests;
