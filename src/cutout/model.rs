use crate::foundation::core::Rect;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Hardware cutout category, as reported upstream.
pub enum CutoutKind {
    /// No cutout.
    #[default]
    None,
    /// Circular camera hole.
    PunchHole,
    /// Teardrop notch; traced as a circle.
    Teardrop,
    /// Pill-shaped island detached from the edge.
    Island,
    /// Rectangular notch cut into the top edge.
    Notch,
    /// Any category this engine does not know.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Detected cutout, in device-independent units.
///
/// Non-`none` kinds need `width` and `height` to be traceable; `x` and `y` default to `0`.
pub struct Cutout {
    /// Category tag.
    #[serde(rename = "type")]
    pub kind: CutoutKind,
    /// Left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Corner rounding for rectangular kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Cutout {
    /// No cutout.
    pub fn none() -> Self {
        Self::default()
    }

    /// Cutout of `kind` occupying `x, y, width, height`.
    pub fn new(kind: CutoutKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            radius: None,
        }
    }

    /// Notch cutout.
    pub fn notch(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(CutoutKind::Notch, x, y, width, height)
    }

    /// Island cutout.
    pub fn island(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(CutoutKind::Island, x, y, width, height)
    }

    /// Punch-hole cutout.
    pub fn punch_hole(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(CutoutKind::PunchHole, x, y, width, height)
    }

    /// Teardrop cutout.
    pub fn teardrop(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(CutoutKind::Teardrop, x, y, width, height)
    }

    /// Same cutout with a corner radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Physical bounds, or `None` when width or height is missing.
    pub fn bounds(&self) -> Option<Rect> {
        let (w, h) = (self.width?, self.height?);
        let x = self.x.unwrap_or(0.0);
        let y = self.y.unwrap_or(0.0);
        Some(Rect::new(x, y, x + w, y + h))
    }

    /// Whether every present number is finite.
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height, self.radius]
            .into_iter()
            .flatten()
            .all(f64::is_finite)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cutout/model.rs"]
mod tests;
