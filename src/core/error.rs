//! Error types for the visualizer.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which input field a launch failed to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Speed,
    Angle,
    Vx,
    Vy,
    Height,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Speed => "speed",
            Self::Angle => "angle",
            Self::Vx => "vx",
            Self::Vy => "vy",
            Self::Height => "height",
        };
        f.write_str(name)
    }
}

/// Reasons a launch produces no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    #[error("Invalid {field}: '{raw}'. Expected a number.")]
    NonNumeric { field: InputField, raw: String },

    #[error("No real landing time: vy^2 - 2*g*h is negative ({discriminant}).")]
    NoRealRoot { discriminant: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Nothing to plot: trajectory has fewer than two points")]
    EmptyTrajectory,

    #[error("Plot rendering failed: {0}")]
    Render(String),
}

/// Umbrella error for the command-line and window entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
