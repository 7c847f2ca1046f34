use crate::animation::dash::DashPattern;
use crate::foundation::core::{BezPath, FillRule, Rect};
use crate::foundation::error::{BeamError, BeamResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Everything a renderer needs to draw one beam.
///
/// `path_d` and `mask_d` are relative to `(svg_left, svg_top)`. For bar-family shapes
/// that origin is the screen origin, so their x coordinates are absolute.
pub struct PathSpec {
    /// Traced boundary, SVG path data.
    pub path_d: String,
    /// Glow-admission region, when directional glow is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_d: Option<String>,
    /// Fill rule for `mask_d`; present exactly when `mask_d` is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_fill_rule: Option<FillRule>,
    /// Arc length of `path_d`.
    pub perimeter: f64,
    /// Canvas left edge, absolute.
    pub svg_left: f64,
    /// Canvas top edge, absolute.
    pub svg_top: f64,
    /// Canvas width.
    pub svg_width: f64,
    /// Canvas height.
    pub svg_height: f64,
}

impl PathSpec {
    /// Canvas box in absolute coordinates.
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(
            self.svg_left,
            self.svg_top,
            self.svg_left + self.svg_width,
            self.svg_top + self.svg_height,
        )
    }

    /// Parse `path_d` back into a kurbo path (canvas-local).
    pub fn to_bez_path(&self) -> BeamResult<BezPath> {
        parse_path_data(&self.path_d)
    }

    /// Parse `mask_d`, if any.
    pub fn mask_bez_path(&self) -> BeamResult<Option<BezPath>> {
        self.mask_d.as_deref().map(parse_path_data).transpose()
    }

    /// Dash pattern lighting `beam_fraction` of this path.
    pub fn dash_pattern(&self, beam_fraction: f64) -> DashPattern {
        DashPattern::new(self.perimeter, beam_fraction)
    }
}

fn parse_path_data(d: &str) -> BeamResult<BezPath> {
    BezPath::from_svg(d).map_err(|e| BeamError::validation(format!("invalid path data: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/path_spec.rs"]
mod tests;
