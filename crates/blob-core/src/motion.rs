//! Exponential smoothing of the focal point toward the pointer target.

use glam::DVec2;

/// Point in the internal coordinate space.
pub type Point2D = DVec2;

/// Close `factor` of the remaining distance between `current` and `target`.
///
/// Applied per axis. Inputs must be finite: a non-finite target yields a
/// non-finite result, which callers are expected to never feed in.
#[inline]
pub fn advance(current: Point2D, target: Point2D, factor: f64) -> Point2D {
    current + (target - current) * factor
}

/// Focal point plus the target it chases.
///
/// Input handlers only ever write `target`; `current` moves solely through
/// [`FocalState::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalState {
    current: Point2D,
    target: Point2D,
}

impl FocalState {
    pub fn at(point: Point2D) -> Self {
        Self {
            current: point,
            target: point,
        }
    }

    pub fn current(&self) -> Point2D {
        self.current
    }

    pub fn target(&self) -> Point2D {
        self.target
    }

    pub fn set_target(&mut self, target: Point2D) {
        self.target = target;
    }

    pub fn step(&mut self, factor: f64) -> Point2D {
        self.current = advance(self.current, self.target, factor);
        self.current
    }
}
