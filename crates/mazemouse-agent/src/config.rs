//! Agent tuning and its validation.

use std::error::Error;
use std::fmt;

use mazemouse_core::Heading;

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected by [`ContinuousConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A tuning scalar is NaN, infinite, zero, or negative.
    InvalidScalar {
        /// Name of the offending field.
        field: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The agent's disc would not fit through a one-cell corridor.
    RadiusTooLarge {
        /// `cell_size * radius_ratio`.
        radius: f64,
        /// Configured cell size.
        cell_size: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScalar { field, value } => {
                write!(f, "{field} must be finite and positive, got {value}")
            }
            Self::RadiusTooLarge { radius, cell_size } => {
                write!(
                    f,
                    "radius {radius} must be below half the cell size {cell_size}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScalar { field, value })
    }
}

// ── DiscreteConfig ──────────────────────────────────────────────

/// Tuning for a [`DiscreteAgent`](crate::DiscreteAgent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscreteConfig {
    /// Heading after construction and every reset. Default: North.
    pub initial_heading: Heading,
}

impl Default for DiscreteConfig {
    fn default() -> Self {
        Self {
            initial_heading: Heading::North,
        }
    }
}

// ── ContinuousConfig ────────────────────────────────────────────

/// Tuning for a [`ContinuousAgent`](crate::ContinuousAgent).
///
/// Lengths are in pixels and angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousConfig {
    /// Side length of one maze cell. Default: 50.
    pub cell_size: f64,
    /// Distance covered by one `move_forward`. Default: 5.
    pub speed: f64,
    /// Degrees turned by one `turn_left`/`turn_right`. Default: 90.
    pub rotation_speed: f64,
    /// Sensor reach as `[left, front, right]`. Default: 0.75 cell each.
    pub detection_ranges: [f64; 3],
    /// Disc radius as a fraction of `cell_size`. Default: 0.25.
    pub radius_ratio: f64,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            speed: 5.0,
            rotation_speed: 90.0,
            detection_ranges: [37.5; 3],
            radius_ratio: 0.25,
        }
    }
}

impl ContinuousConfig {
    /// Disc radius in pixels.
    pub fn radius(&self) -> f64 {
        self.cell_size * self.radius_ratio
    }

    /// Check that every scalar is finite and positive and that the disc
    /// fits inside a corridor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("cell_size", self.cell_size)?;
        check_positive("speed", self.speed)?;
        check_positive("rotation_speed", self.rotation_speed)?;
        check_positive("radius_ratio", self.radius_ratio)?;
        let [left, front, right] = self.detection_ranges;
        check_positive("detection_ranges.left", left)?;
        check_positive("detection_ranges.front", front)?;
        check_positive("detection_ranges.right", right)?;
        let radius = self.radius();
        if radius >= self.cell_size / 2.0 {
            return Err(ConfigError::RadiusTooLarge {
                radius,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}
