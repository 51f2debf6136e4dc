use crate::constants::{scale_transform, translate_transform};
use blob_core::{CurvePath, Point2D, Surface};
use web_sys as web;

/// SVG elements the blob is drawn into.
///
/// `position` carries the focal translation, `scale` nests inside it and
/// carries the size correction, and `shape` is the mask path itself.
pub struct SvgSurface {
    pub position: web::Element,
    pub scale: web::Element,
    pub shape: web::Element,
    pub blur: Option<web::Element>,
    path_buf: String,
}

impl SvgSurface {
    pub fn new(
        position: web::Element,
        scale: web::Element,
        shape: web::Element,
        blur: Option<web::Element>,
    ) -> Self {
        Self {
            position,
            scale,
            shape,
            blur,
            path_buf: String::new(),
        }
    }

    pub fn set_scale(&self, scale: f64) {
        _ = self.scale.set_attribute("transform", &scale_transform(scale));
    }

    pub fn set_blur(&self, std_deviation: &str) {
        if let Some(el) = &self.blur {
            _ = el.set_attribute("stdDeviation", std_deviation);
        }
    }
}

impl Surface for SvgSurface {
    fn set_path(&mut self, path: &CurvePath) {
        use std::fmt::Write;
        self.path_buf.clear();
        _ = write!(self.path_buf, "{path}");
        _ = self.shape.set_attribute("d", &self.path_buf);
    }

    fn set_translation(&mut self, focal: Point2D) {
        _ = self
            .position
            .set_attribute("transform", &translate_transform(focal.x, focal.y));
    }
}
