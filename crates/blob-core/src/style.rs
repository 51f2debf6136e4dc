//! Style parameters read from CSS custom properties.

use crate::config::is_valid_smoothing;
use crate::constants::{CSS_VAR_BLUR, CSS_VAR_SIZE, CSS_VAR_SMOOTHING};

/// Parse the leading numeric part of a CSS value (`"120px"` -> 120).
pub fn parse_css_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let bytes = s.as_bytes();
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'+' | b'-' if end == 0 => {}
            b'+' | b'-' if seen_exp && matches!(bytes[end - 1], b'e' | b'E') => {}
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => {
                // only an exponent when digits follow
                let rest = &bytes[end + 1..];
                let digits_at = match rest.first() {
                    Some(b'+' | b'-') => 1,
                    _ => 0,
                };
                if !rest.get(digits_at).is_some_and(u8::is_ascii_digit) {
                    break;
                }
                seen_exp = true;
            }
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Values pulled from the global style source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleParams {
    pub blur: Option<String>,
    pub size_px: Option<f64>,
    pub smoothing: Option<f64>,
}

impl StyleParams {
    /// Build from a property lookup such as `getPropertyValue`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let blur = lookup(CSS_VAR_BLUR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let size_px = lookup(CSS_VAR_SIZE)
            .as_deref()
            .and_then(parse_css_number)
            .filter(|v| *v != 0.0);
        let smoothing = lookup(CSS_VAR_SMOOTHING)
            .as_deref()
            .and_then(parse_css_number)
            .filter(|v| is_valid_smoothing(*v));
        Self {
            blur,
            size_px,
            smoothing,
        }
    }
}
