// Shared tuning constants used by both the web front-end and the preview.

// Internal coordinate space (matches the SVG viewBox)
pub const VIEWBOX_WIDTH: f64 = 800.0;
pub const VIEWBOX_HEIGHT: f64 = 600.0;

// Default blob shape
pub const DEFAULT_RADIUS: f64 = 60.0;
pub const DEFAULT_POINT_COUNT: usize = 8;
pub const MIN_POINT_COUNT: usize = 3; // fewer points cannot form a closed curve
pub const DEFAULT_WOBBLE_AMPLITUDE: f64 = 15.0;
pub const DEFAULT_WOBBLE_SPEED: f64 = 0.0015; // radians per approximate millisecond
pub const DEFAULT_SMOOTHING: f64 = 0.08; // fraction of remaining distance closed per frame

// Frame pacing
pub const FRAME_DELTA_MS: f64 = 16.0; // approximate duration of one display frame
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

// Wobble harmonics: (amplitude ratio, frequency ratio, phase step per ring index)
pub const WOBBLE_HARMONICS: [(f64, f64, f64); 3] = [
    (1.0, 1.0, 1.0), // primary
    (0.5, 1.3, 2.0),
    (0.3, 0.7, 3.0),
];

// CSS custom properties read from the document root
pub const CSS_VAR_BLUR: &str = "--blob-blur";
pub const CSS_VAR_SIZE: &str = "--blob-size";
pub const CSS_VAR_SMOOTHING: &str = "--blob-smoothing";
