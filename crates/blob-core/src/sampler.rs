//! Wobbling ring of points around the focal point.
//!
//! The radius at each vertex is perturbed by three layered sinusoids with
//! incommensurate frequencies, so the outline never settles into a uniform
//! pulse. There is no randomness: identical inputs give identical rings.

use crate::config::BlobConfig;
use crate::constants::WOBBLE_HARMONICS;
use crate::motion::Point2D;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Ring vertices for one frame. Sized so the default configuration never allocates.
pub type RingPoints = SmallVec<[Point2D; 16]>;

/// Monotonic wobble clock, advanced once per frame and never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeCursor(f64);

impl TimeCursor {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn advance(&mut self, speed: f64, delta_ms: f64) -> f64 {
        self.0 += speed * delta_ms;
        self.0
    }
}

/// Radius offset contributed by the harmonics at `index` and `time`.
#[inline]
pub fn wobble_offset(index: usize, time: f64, amplitude: f64) -> f64 {
    let i = index as f64;
    WOBBLE_HARMONICS
        .iter()
        .map(|&(amp_ratio, freq_ratio, phase_step)| {
            amp_ratio * (time * freq_ratio + i * phase_step).sin()
        })
        .sum::<f64>()
        * amplitude
}

/// Sample `config.point_count` points evenly spaced by angle, index 0 at angle 0.
pub fn sample(center: Point2D, time: f64, config: &BlobConfig) -> RingPoints {
    let n = config.point_count;
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * TAU;
            let radius = config.radius + wobble_offset(i, time, config.wobble_amplitude);
            center + Point2D::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
