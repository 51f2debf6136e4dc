//! Per-frame animation step and the Running/Paused state machine.
//!
//! The driver never touches a timer itself. Every entry point returns a
//! [`Schedule`] telling the host whether to request the next display frame,
//! and the driver tracks whether one is already outstanding so that at most
//! one frame loop exists per instance.

use crate::config::{is_valid_smoothing, BlobConfig};
use crate::constants::FRAME_DELTA_MS;
use crate::curve::{build, CurvePath};
use crate::motion::{FocalState, Point2D};
use crate::sampler::{sample, TimeCursor};
use crate::viewport::internal_center;

/// Rendering seam for the per-frame output.
pub trait Surface {
    fn set_path(&mut self, path: &CurvePath);

    /// Position of the shape. Only sent in [`ShapeFrame::Local`]; a `World`
    /// path already contains the focal offset.
    fn set_translation(&mut self, _focal: Point2D) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Paused,
}

/// What the host must do after calling into the driver.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    RequestFrame,
    Nothing,
}

/// Where the ring is centred when sampled.
///
/// `World` samples around the focal point itself and sends no translation.
/// `Local` samples around the origin for surfaces that place the shape with
/// the translation alone and scale it about its own centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeFrame {
    #[default]
    World,
    Local,
}

pub struct AnimationDriver {
    config: BlobConfig,
    smoothing: f64,
    focal: FocalState,
    time: TimeCursor,
    state: DriverState,
    shape_frame: ShapeFrame,
    frame_pending: bool,
    hovering: bool,
    disposed: bool,
}

impl AnimationDriver {
    pub fn new(config: BlobConfig) -> Self {
        Self {
            smoothing: config.smoothing,
            config,
            focal: FocalState::at(internal_center()),
            time: TimeCursor::default(),
            state: DriverState::Paused,
            shape_frame: ShapeFrame::default(),
            frame_pending: false,
            hovering: false,
            disposed: false,
        }
    }

    pub fn with_shape_frame(mut self, shape_frame: ShapeFrame) -> Self {
        self.shape_frame = shape_frame;
        self
    }

    pub fn config(&self) -> &BlobConfig {
        &self.config
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn focal(&self) -> &FocalState {
        &self.focal
    }

    pub fn time(&self) -> f64 {
        self.time.value()
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn set_target(&mut self, target: Point2D) {
        if self.disposed {
            return;
        }
        self.focal.set_target(target);
    }

    /// Hover is cosmetic only and never gates the frame loop.
    pub fn set_hovering(&mut self, hovering: bool) {
        if self.disposed {
            return;
        }
        self.hovering = hovering;
    }

    /// Override the smoothing factor; values outside (0, 1] are ignored.
    pub fn set_smoothing(&mut self, factor: f64) {
        if self.disposed {
            return;
        }
        if is_valid_smoothing(factor) {
            self.smoothing = factor;
        } else {
            log::debug!("[driver] ignoring smoothing override {factor}");
        }
    }

    pub fn set_visible(&mut self, visible: bool) -> Schedule {
        if self.disposed {
            return Schedule::Nothing;
        }
        if !visible {
            if self.state == DriverState::Running {
                log::debug!("[driver] paused");
            }
            self.state = DriverState::Paused;
            return Schedule::Nothing;
        }
        if self.state == DriverState::Paused {
            log::debug!("[driver] running");
            self.state = DriverState::Running;
        }
        if self.frame_pending {
            // the outstanding frame will observe Running and keep going
            return Schedule::Nothing;
        }
        self.frame_pending = true;
        Schedule::RequestFrame
    }

    /// Execute one display frame.
    ///
    /// Order is fixed: smooth the focal point, advance time, sample the ring
    /// at the smoothed focal point, build the curve, write the surface and
    /// finally ask for the next frame. A paused or released driver does
    /// nothing and lets the loop lapse.
    pub fn run_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Schedule {
        self.frame_pending = false;
        if self.disposed || self.state == DriverState::Paused {
            return Schedule::Nothing;
        }

        let focal = self.focal.step(self.smoothing);
        let time = self.time.advance(self.config.wobble_speed, FRAME_DELTA_MS);
        let center = match self.shape_frame {
            ShapeFrame::World => focal,
            ShapeFrame::Local => Point2D::ZERO,
        };
        let ring = sample(center, time, &self.config);
        let path = build(&ring);

        if !path.is_empty() {
            surface.set_path(&path);
        }
        if self.shape_frame == ShapeFrame::Local {
            surface.set_translation(focal);
        }

        self.frame_pending = true;
        Schedule::RequestFrame
    }

    /// Stop the loop for good. Safe to call repeatedly.
    pub fn release(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.state = DriverState::Paused;
        self.frame_pending = false;
        log::debug!("[driver] released");
    }
}
