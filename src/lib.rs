//! Seam-free beam paths around screen cutouts.
//!
//! Given a detected [`Cutout`] (notch, island, punch-hole, teardrop, or none) and a
//! padding, [`build_path_spec`] produces a [`PathSpec`]: SVG path data tracing the cutout
//! boundary, an optional directional-glow mask, the exact perimeter of the path, and the
//! canvas box the path is expressed in.
//!
//! # Families
//!
//! - **Bar** (`none`, `notch`): an open line along the top edge that detours around a
//!   notch. The canvas is the screen origin, full width.
//! - **Orbit** (`punch_hole`, `teardrop`, `island`): a closed loop around the shape, in a
//!   canvas local to it.
//!
//! The perimeter is measured while the path is written, so a dash pattern sized from it
//! ([`DashPattern`]) completes exactly one traversal per loop.
//!
//! The engine is pure: no I/O, no state, no errors. Inputs it cannot trace yield `None`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod cutout;
mod engine;
mod foundation;
mod geometry;

pub use animation::dash::DashPattern;
pub use cutout::devices::{DeviceProfile, DeviceTable};
pub use cutout::model::{Cutout, CutoutKind};
pub use engine::config::EngineConfig;
pub use engine::dispatch::{Family, PathEngine, build_path_spec, classify};
pub use engine::path_spec::PathSpec;
pub use foundation::core::{BezPath, FillRule, MIN_TRACE_EXTENT, Point, Rect, Size, Vec2};
pub use foundation::error::{BeamError, BeamResult};
pub use geometry::mask::{Mask, bar_mask, orbit_mask};
pub use geometry::notch_bar::{Bar, NotchBar};
pub use geometry::primitives::{
    circle_path, circle_perimeter, rounded_rect_path, rounded_rect_perimeter, safe_corner_radius,
};
pub use geometry::trace::{ArcSweep, TracePath, circular_arc_length};
