use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cutout::model::{Cutout, CutoutKind};
use crate::foundation::error::{BeamError, BeamResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Screen size and cutout of one device model.
pub struct DeviceProfile {
    /// Usable screen width.
    pub screen_width: f64,
    /// Usable screen height.
    pub screen_height: f64,
    /// Physical cutout.
    pub cutout: Cutout,
}

impl DeviceProfile {
    /// Reject non-finite or non-positive screen sizes and non-finite cutout numbers.
    pub fn validate(&self) -> BeamResult<()> {
        if !(self.screen_width.is_finite() && self.screen_width > 0.0) {
            return Err(BeamError::validation("screen_width must be finite and > 0"));
        }
        if !(self.screen_height.is_finite() && self.screen_height > 0.0) {
            return Err(BeamError::validation(
                "screen_height must be finite and > 0",
            ));
        }
        if !self.cutout.is_finite() {
            return Err(BeamError::validation("cutout values must be finite"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Device identifier to cutout geometry.
///
/// A plain value: build one, load one from JSON, or overlay one on another. Nothing
/// in the engine reads it implicitly.
pub struct DeviceTable {
    entries: BTreeMap<String, DeviceProfile>,
}

impl DeviceTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Approximate geometry for a handful of common devices, in points.
    pub fn builtin() -> Self {
        let mut t = Self::new();
        t.insert("iPhone8,4", 320.0, 568.0, Cutout::none());
        t.insert("iPhone12,8", 375.0, 667.0, Cutout::none());
        t.insert(
            "iPhone10,3",
            375.0,
            812.0,
            Cutout::notch(83.0, 0.0, 209.0, 30.0).with_radius(20.0),
        );
        t.insert(
            "iPhone13,2",
            390.0,
            844.0,
            Cutout::notch(90.0, 0.0, 210.0, 32.0).with_radius(20.0),
        );
        t.insert(
            "iPhone14,5",
            390.0,
            844.0,
            Cutout::notch(117.0, 0.0, 156.0, 33.0).with_radius(20.0),
        );
        t.insert(
            "iPhone15,2",
            393.0,
            852.0,
            Cutout::island(134.0, 11.0, 125.0, 37.0).with_radius(18.5),
        );
        t.insert(
            "iPhone16,2",
            430.0,
            932.0,
            Cutout::island(152.5, 11.0, 125.0, 37.0).with_radius(18.5),
        );
        t.insert(
            "Pixel 7",
            412.0,
            915.0,
            Cutout::punch_hole(194.0, 14.0, 24.0, 24.0),
        );
        t.insert(
            "SM-G991B",
            360.0,
            800.0,
            Cutout::punch_hole(170.0, 10.0, 20.0, 20.0),
        );
        t.insert(
            "Redmi Note 8",
            393.0,
            851.0,
            Cutout::new(CutoutKind::Teardrop, 176.0, 0.0, 41.0, 24.0),
        );
        t
    }

    /// Parse a JSON object of `id -> profile` and validate every entry.
    pub fn from_json_reader<R: Read>(reader: R) -> BeamResult<Self> {
        let table: Self = serde_json::from_reader(reader)?;
        for (id, profile) in &table.entries {
            profile
                .validate()
                .map_err(|e| BeamError::validation(format!("device '{id}': {e}")))?;
        }
        Ok(table)
    }

    /// Open a JSON table file; see [`DeviceTable::from_json_reader`].
    pub fn from_json_path(path: impl AsRef<Path>) -> BeamResult<Self> {
        let f = File::open(path)?;
        Self::from_json_reader(BufReader::new(f))
    }

    /// Add or replace one device.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        screen_width: f64,
        screen_height: f64,
        cutout: Cutout,
    ) {
        self.entries.insert(
            id.into(),
            DeviceProfile {
                screen_width,
                screen_height,
                cutout,
            },
        );
    }

    /// Overlay `other`; its entries win.
    pub fn merge(&mut self, other: DeviceTable) {
        self.entries.extend(other.entries);
    }

    /// Profile for `id`, if known.
    pub fn get(&self, id: &str) -> Option<&DeviceProfile> {
        self.entries.get(id)
    }

    /// Profile for `id`, or a lookup error.
    pub fn require(&self, id: &str) -> BeamResult<&DeviceProfile> {
        self.get(id)
            .ok_or_else(|| BeamError::lookup(format!("unknown device '{id}'")))
    }

    /// Known identifiers, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cutout/devices.rs"]
mod tests;
