/// Two-element dash pattern sized so one cycle is one full traversal of a path.
///
/// The visible dash is followed by a gap equal to the whole perimeter, so exactly one
/// beam is on the path at any time and it wraps without a jump at the seam.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashPattern {
    /// Length of the lit part.
    pub visible: f64,
    /// Full path length; also the gap length.
    pub perimeter: f64,
}

impl DashPattern {
    /// Pattern lighting `beam_fraction` (clamped to `[0, 1]`) of `perimeter`.
    pub fn new(perimeter: f64, beam_fraction: f64) -> Self {
        let perimeter = if perimeter.is_finite() {
            perimeter.max(0.0)
        } else {
            0.0
        };
        let fraction = if beam_fraction.is_finite() {
            beam_fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            visible: fraction * perimeter,
            perimeter,
        }
    }

    /// `stroke-dasharray` values.
    pub fn dash_array(&self) -> [f64; 2] {
        [self.visible, self.perimeter]
    }

    /// `stroke-dashoffset` at loop `progress`.
    ///
    /// Progress wraps every whole loop; the offset falls linearly from `0` towards
    /// `-perimeter` within each loop.
    pub fn offset_at(&self, progress: f64) -> f64 {
        if !progress.is_finite() {
            return 0.0;
        }
        let t = progress.rem_euclid(1.0);
        if t == 0.0 { 0.0 } else { -t * self.perimeter }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dash.rs"]
mod tests;
