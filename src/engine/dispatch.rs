use crate::cutout::model::{Cutout, CutoutKind};
use crate::engine::config::EngineConfig;
use crate::engine::path_spec::PathSpec;
use crate::engine::policy::{bar_canvas, orbit_canvas, orbit_circle, padded_rect};
use crate::foundation::core::{Point, Rect};
use crate::geometry::mask::{Mask, bar_mask, orbit_mask};
use crate::geometry::notch_bar::{Bar, NotchBar};
use crate::geometry::primitives::{circle_path, rounded_rect_path};
use crate::geometry::trace::TracePath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// How a cutout category is drawn.
pub enum Family {
    /// Edge-attached: an open line across the screen that detours around the cutout.
    Bar,
    /// Isolated: a closed loop around the cutout.
    Orbit,
}

/// Family for a cutout category, or `None` when the category is unknown.
pub fn classify(kind: CutoutKind) -> Option<Family> {
    match kind {
        CutoutKind::None | CutoutKind::Notch => Some(Family::Bar),
        CutoutKind::PunchHole | CutoutKind::Teardrop | CutoutKind::Island => {
            Some(Family::Orbit)
        }
        CutoutKind::Unknown => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Outline {
    Bar(Bar),
    Orbit(Orbit),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Orbit {
    Circle { center: Point, radius: f64 },
    RoundedRect { rect: Rect, radius: f64 },
}

impl Outline {
    fn resolve(cutout: &Cutout, padding: f64, config: &EngineConfig) -> Option<Self> {
        let outline = match cutout.kind {
            CutoutKind::None => Self::Bar(Bar::straight(config.screen_width, padding)),
            CutoutKind::Notch => Self::Bar(Bar::Notched(NotchBar::new(
                config.screen_width,
                cutout.bounds()?,
                cutout.radius,
                padding,
            ))),
            CutoutKind::PunchHole | CutoutKind::Teardrop => {
                let (center, radius) = orbit_circle(cutout.bounds()?, padding);
                Self::Orbit(Orbit::Circle { center, radius })
            }
            CutoutKind::Island => {
                let bounds = cutout.bounds()?;
                let base = cutout
                    .radius
                    .or(config.island_radius)
                    .unwrap_or(bounds.height().abs() / 2.0);
                Self::Orbit(Orbit::RoundedRect {
                    rect: padded_rect(bounds, padding),
                    radius: base + padding,
                })
            }
            CutoutKind::Unknown => return None,
        };
        Some(outline)
    }
}

impl Orbit {
    fn bounds(&self) -> Rect {
        match *self {
            Self::Circle { center, radius } => {
                Rect::from_center_size(center, (2.0 * radius, 2.0 * radius))
            }
            Self::RoundedRect { rect, .. } => rect,
        }
    }

    fn trace(&self, path: &mut TracePath) {
        match *self {
            Self::Circle { center, radius } => circle_path(path, center, radius),
            Self::RoundedRect { rect, radius } => {
                rounded_rect_path(path, rect, radius);
            }
        }
    }
}

/// Trace `cutout` grown by `padding`.
///
/// Returns `None`, never an error, when there is nothing to draw: an unknown category, a
/// non-`none` cutout without width or height, a non-finite number, or an invalid config.
#[tracing::instrument(level = "debug", skip(config))]
pub fn build_path_spec(cutout: &Cutout, padding: f64, config: &EngineConfig) -> Option<PathSpec> {
    if !padding.is_finite() || !cutout.is_finite() {
        tracing::debug!("non-finite cutout or padding");
        return None;
    }
    if let Err(err) = config.validate() {
        tracing::debug!(%err, "engine config rejected");
        return None;
    }
    let Some(family) = classify(cutout.kind) else {
        tracing::debug!(kind = ?cutout.kind, "unrecognized cutout type");
        return None;
    };
    let Some(outline) = Outline::resolve(cutout, padding, config) else {
        tracing::debug!(kind = ?cutout.kind, "cutout is missing width or height");
        return None;
    };

    let spec = match outline {
        Outline::Bar(bar) => assemble_bar(&bar, config),
        Outline::Orbit(orbit) => assemble_orbit(&orbit, config),
    };
    tracing::debug!(?family, perimeter = spec.perimeter, "traced cutout");
    Some(spec)
}

fn assemble_bar(bar: &Bar, config: &EngineConfig) -> PathSpec {
    let canvas = bar_canvas(config.screen_width, bar.lowest_y(), config.bleed);
    tracing::trace!(?canvas, "bar canvas");

    let mut path = TracePath::new();
    bar.trace(&mut path);
    let (path_d, perimeter) = path.finish();
    let mask = config
        .directional_glow
        .then(|| bar_mask(bar, canvas.height()));

    finish(path_d, perimeter, mask, canvas)
}

fn assemble_orbit(orbit: &Orbit, config: &EngineConfig) -> PathSpec {
    let shape = orbit.bounds();
    let canvas = orbit_canvas(shape, config.bleed);
    tracing::trace!(?shape, ?canvas, "orbit canvas");

    let mut path = TracePath::with_origin(canvas.origin());
    orbit.trace(&mut path);
    let (path_d, perimeter) = path.finish();
    let mask = config
        .directional_glow
        .then(|| orbit_mask(canvas.size(), &path_d));

    finish(path_d, perimeter, mask, canvas)
}

fn finish(path_d: String, perimeter: f64, mask: Option<Mask>, canvas: Rect) -> PathSpec {
    let (mask_d, mask_fill_rule) = match mask {
        Some(m) => (Some(m.d), Some(m.fill_rule)),
        None => (None, None),
    };
    PathSpec {
        path_d,
        mask_d,
        mask_fill_rule,
        perimeter,
        svg_left: canvas.x0,
        svg_top: canvas.y0,
        svg_width: canvas.width(),
        svg_height: canvas.height(),
    }
}

/// Stateless engine bound to one configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathEngine {
    config: EngineConfig,
}

impl PathEngine {
    /// Engine using `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// See [`build_path_spec`].
    pub fn build(&self, cutout: &Cutout, padding: f64) -> Option<PathSpec> {
        build_path_spec(cutout, padding, &self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/dispatch.rs"]
mod tests;
