// Page structure and timing constants used by the web frontend.

// Elements
pub const CONTAINER_SELECTOR: &str = ".image-container";
pub const POSITION_SELECTOR: &str = ".blob-position"; // receives the focal translation
pub const SCALE_SELECTOR: &str = ".blob-scale"; // receives the size correction
pub const SHAPE_SELECTOR: &str = ".blob-shape"; // mask path, `d` rewritten every frame
pub const BLUR_SELECTOR: &str = "#blobBlur feGaussianBlur"; // optional

// Classes toggled on the container
pub const HOVER_CLASS: &str = "is-hovering";

// Number formatting for SVG transforms
pub const TRANSLATE_DECIMALS: usize = 2;
pub const SCALE_DECIMALS: usize = 4;

/// `translate(x, y)` transform for the focal position.
#[inline]
pub fn translate_transform(x: f64, y: f64) -> String {
    format!(
        "translate({:.*}, {:.*})",
        TRANSLATE_DECIMALS, x, TRANSLATE_DECIMALS, y
    )
}

/// `scale(s)` transform for the size correction.
#[inline]
pub fn scale_transform(scale: f64) -> String {
    format!("scale({:.*})", SCALE_DECIMALS, scale)
}
