pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// Smallest extent, in input units, a traced shape may collapse to.
///
/// Padding can shrink a shape past zero; clamping to this keeps every traced loop
/// at a positive perimeter.
pub const MIN_TRACE_EXTENT: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Fill rule paired with a mask path.
pub enum FillRule {
    /// Union of all subpaths. Used for bar masks ("everything below the line").
    #[serde(rename = "nonzero")]
    NonZero,
    /// Alternating inside/outside. Used for orbit masks (canvas minus shape).
    #[serde(rename = "evenodd")]
    EvenOdd,
}

impl FillRule {
    /// Name as written in SVG `fill-rule`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

impl std::fmt::Display for FillRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp `v` to `>= 0`, mapping NaN to zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}
