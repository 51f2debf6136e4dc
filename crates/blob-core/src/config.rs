//! Immutable per-instance blob configuration.

use crate::constants::*;
use crate::error::ConfigError;

/// Shape and motion parameters fixed at construction.
///
/// Distances are in internal coordinate units, speed is in radians per
/// approximate millisecond of frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobConfig {
    pub radius: f64,
    pub point_count: usize,
    pub wobble_amplitude: f64,
    pub wobble_speed: f64,
    pub smoothing: f64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            point_count: DEFAULT_POINT_COUNT,
            wobble_amplitude: DEFAULT_WOBBLE_AMPLITUDE,
            wobble_speed: DEFAULT_WOBBLE_SPEED,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl BlobConfig {
    pub fn with_radius(self, radius: f64) -> Self {
        Self { radius, ..self }
    }

    pub fn with_point_count(self, point_count: usize) -> Self {
        Self {
            point_count,
            ..self
        }
    }

    pub fn with_wobble(self, amplitude: f64, speed: f64) -> Self {
        Self {
            wobble_amplitude: amplitude,
            wobble_speed: speed,
            ..self
        }
    }

    pub fn with_smoothing(self, smoothing: f64) -> Self {
        Self { smoothing, ..self }
    }

    /// Nominal diameter of the unwobbled ring in internal units; the size
    /// correction maps this onto the desired on-screen size.
    pub fn shape_size(&self) -> f64 {
        2.0 * self.radius
    }

    /// Check every field and hand back the config unchanged when it is usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.point_count < MIN_POINT_COUNT {
            return Err(ConfigError::TooFewPoints(self.point_count));
        }
        for (field, value) in [
            ("radius", self.radius),
            ("wobble_amplitude", self.wobble_amplitude),
            ("wobble_speed", self.wobble_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMagnitude { field, value });
            }
        }
        if !is_valid_smoothing(self.smoothing) {
            return Err(ConfigError::SmoothingOutOfRange(self.smoothing));
        }
        Ok(self)
    }
}

#[inline]
pub fn is_valid_smoothing(factor: f64) -> bool {
    factor > 0.0 && factor <= 1.0
}
