use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::error::{BeamError, BeamResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Engine-wide settings that are not part of a cutout.
pub struct EngineConfig {
    /// Usable screen width; bar-family canvases span it.
    pub screen_width: f64,
    /// Extra canvas margin around the traced path for blur and glow.
    pub bleed: f64,
    /// Emit a directional glow mask with every path.
    pub directional_glow: bool,
    /// Island corner radius when the cutout reports none. Unset means a full pill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub island_radius: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: 390.0,
            bleed: 20.0,
            directional_glow: true,
            island_radius: None,
        }
    }
}

impl EngineConfig {
    /// Parse JSON and validate. Missing fields take their defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> BeamResult<Self> {
        let cfg: Self = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Open a JSON config file; see [`EngineConfig::from_json_reader`].
    pub fn from_json_path(path: impl AsRef<Path>) -> BeamResult<Self> {
        let f = File::open(path)?;
        Self::from_json_reader(BufReader::new(f))
    }

    /// Reject values the geometry cannot use.
    pub fn validate(&self) -> BeamResult<()> {
        if !(self.screen_width.is_finite() && self.screen_width > 0.0) {
            return Err(BeamError::validation("screen_width must be finite and > 0"));
        }
        if !(self.bleed.is_finite() && self.bleed >= 0.0) {
            return Err(BeamError::validation("bleed must be finite and >= 0"));
        }
        if let Some(r) = self.island_radius
            && !(r.is_finite() && r >= 0.0)
        {
            return Err(BeamError::validation(
                "island_radius must be finite and >= 0 when set",
            ));
        }
        Ok(())
    }

    /// Same config with another screen width.
    pub fn with_screen_width(mut self, screen_width: f64) -> Self {
        self.screen_width = screen_width;
        self
    }

    /// Same config with another bleed.
    pub fn with_bleed(mut self, bleed: f64) -> Self {
        self.bleed = bleed;
        self
    }

    /// Same config with the glow mask switched on or off.
    pub fn with_directional_glow(mut self, on: bool) -> Self {
        self.directional_glow = on;
        self
    }
}
