use crate::constants::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::motion::Point2D;

/// Cached container size in CSS pixels, refreshed on resize and pointer enter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Map a container-relative pixel offset into the internal coordinate space.
    pub fn map_to_internal(&self, offset_px: Point2D) -> Option<Point2D> {
        if self.is_degenerate() {
            return None;
        }
        Some(Point2D::new(
            offset_px.x / self.width * VIEWBOX_WIDTH,
            offset_px.y / self.height * VIEWBOX_HEIGHT,
        ))
    }
}

/// Centre of the internal coordinate space; the focal point starts here.
#[inline]
pub fn internal_center() -> Point2D {
    Point2D::new(VIEWBOX_WIDTH / 2.0, VIEWBOX_HEIGHT / 2.0)
}
