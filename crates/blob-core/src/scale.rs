//! Size correction that keeps the blob at a fixed on-screen pixel size.
//!
//! The SVG scales its fixed internal space to whatever width the container
//! has, so the blob group must be counter-scaled by `internal / container`.

/// Scale factor for the blob group, or `None` when the inputs are degenerate.
///
/// `desired_px` is the on-screen size, `base_units` the unscaled shape size
/// in internal units, `internal_width` the internal space width and
/// `container_px` the container's current pixel width.
pub fn compute_scale(
    desired_px: f64,
    base_units: f64,
    internal_width: f64,
    container_px: f64,
) -> Option<f64> {
    if desired_px == 0.0 || !desired_px.is_finite() {
        return None;
    }
    if container_px == 0.0 || !container_px.is_finite() {
        return None;
    }
    let scale = (desired_px / base_units) * (internal_width / container_px);
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Tracks the scale last written to the surface.
///
/// Starts with nothing applied, so the first valid scale is always reported
/// even when it happens to be 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleReconciler {
    applied: Option<f64>,
}

impl ScaleReconciler {
    pub fn applied(&self) -> Option<f64> {
        self.applied
    }

    /// Recompute for the container width. Returns the scale to write, or
    /// `None` when the inputs are degenerate or the value is unchanged.
    pub fn update(
        &mut self,
        desired_px: Option<f64>,
        base_units: f64,
        internal_width: f64,
        container_px: f64,
    ) -> Option<f64> {
        let Some(scale) =
            desired_px.and_then(|px| compute_scale(px, base_units, internal_width, container_px))
        else {
            log::debug!("[scale] degenerate inputs, keeping {:?}", self.applied);
            return None;
        };
        if self.applied == Some(scale) {
            return None;
        }
        self.applied = Some(scale);
        Some(scale)
    }
}

/// Like [`compute_scale`], but falls back to the previously applied scale.
pub fn reconcile_scale(
    previous: f64,
    desired_px: Option<f64>,
    base_units: f64,
    internal_width: f64,
    container_px: f64,
) -> f64 {
    desired_px
        .and_then(|px| compute_scale(px, base_units, internal_width, container_px))
        .unwrap_or_else(|| {
            log::debug!("[scale] degenerate inputs, keeping {previous}");
            previous
        })
}
