//! Tunables for the solver, the animation, and the input controls.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! gravity_mps2 = -1.62
//!
//! [defaults]
//! height_m = 12.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::ballistics::EARTH_GRAVITY_MPS2;
use crate::core::error::ConfigError;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "parabolic_viz.toml";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRanges {
    pub speed: FieldRange,
    pub angle: FieldRange,
    /// Used for both `vx` and `vy` in component mode.
    pub component: FieldRange,
    pub height: FieldRange,
}

impl Default for FieldRanges {
    fn default() -> Self {
        Self {
            speed: FieldRange::new(0.0, 50.0),
            angle: FieldRange::new(0.0, 90.0),
            component: FieldRange::new(0.0, 50.0),
            height: FieldRange::new(0.0, 30.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchDefaults {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
}

impl Default for LaunchDefaults {
    fn default() -> Self {
        Self {
            speed_mps: 20.0,
            angle_deg: 45.0,
            height_m: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub gravity_mps2: f64,
    pub pixels_per_meter: f64,
    /// Simulated seconds per tick, about one display refresh.
    pub tick_s: f64,
    pub ledge_width_px: f64,
    /// Offset from the particle's corner to its centre, applied to trail markers.
    pub trail_offset_px: f64,
    pub ranges: FieldRanges,
    pub defaults: LaunchDefaults,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
            pixels_per_meter: 10.0,
            tick_s: 0.016,
            ledge_width_px: 12.0,
            trail_offset_px: 24.0,
            ranges: FieldRanges::default(),
            defaults: LaunchDefaults::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::from_path(&fallback);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity_mps2.is_finite() || self.gravity_mps2 >= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gravity_mps2 must be a finite negative number, got {}",
                self.gravity_mps2
            )));
        }
        if !self.pixels_per_meter.is_finite() || self.pixels_per_meter <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "pixels_per_meter must be positive, got {}",
                self.pixels_per_meter
            )));
        }
        if !self.tick_s.is_finite() || self.tick_s <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_s must be positive, got {}",
                self.tick_s
            )));
        }
        if !self.ledge_width_px.is_finite() || self.ledge_width_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "ledge_width_px cannot be negative, got {}",
                self.ledge_width_px
            )));
        }

        let ranges = [
            ("speed", self.ranges.speed),
            ("angle", self.ranges.angle),
            ("component", self.ranges.component),
            ("height", self.ranges.height),
        ];
        for (name, range) in ranges {
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{name} range is empty: {}..{}",
                    range.min, range.max
                )));
            }
        }
        if self.ranges.height.min < 0.0 {
            return Err(ConfigError::Invalid(
                "height range cannot go below ground".to_string(),
            ));
        }
        Ok(())
    }

    pub fn ledge_width_m(&self) -> f64 {
        self.ledge_width_px / self.pixels_per_meter
    }
}
