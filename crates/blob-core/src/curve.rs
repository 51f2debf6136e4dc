//! Closed Catmull-Rom curve through the ring points, emitted as cubic Béziers.

use crate::constants::MIN_POINT_COUNT;
use crate::motion::Point2D;
use std::fmt;

/// One cubic segment ending at `end`; it starts where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub control1: Point2D,
    pub control2: Point2D,
    pub end: Point2D,
}

/// Closed piecewise-cubic path. An empty path renders nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePath {
    start: Point2D,
    segments: Vec<CubicSegment>,
}

impl CurvePath {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start(&self) -> Option<Point2D> {
        (!self.is_empty()).then_some(self.start)
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Points the curve passes through, in emission order (start first, closing point omitted).
    pub fn anchors(&self) -> Vec<Point2D> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.segments.len());
        out.push(self.start);
        out.extend(
            self.segments[..self.segments.len() - 1]
                .iter()
                .map(|s| s.end),
        );
        out
    }

    /// SVG path data (`d` attribute). Empty string for an empty path.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CurvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "M {:.2} {:.2}", self.start.x, self.start.y)?;
        for s in &self.segments {
            write!(
                f,
                " C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                s.control1.x, s.control1.y, s.control2.x, s.control2.y, s.end.x, s.end.y
            )?;
        }
        f.write_str(" Z")
    }
}

/// Fit a smooth closed curve through `points`, passing exactly through each one.
///
/// Neighbours wrap around, so the last segment returns to the first point.
/// Fewer than three points produce an empty path.
pub fn build(points: &[Point2D]) -> CurvePath {
    let n = points.len();
    if n < MIN_POINT_COUNT {
        return CurvePath::default();
    }
    let segments = (0..n)
        .map(|i| {
            let p0 = points[(i + n - 1) % n];
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p3 = points[(i + 2) % n];
            CubicSegment {
                control1: p1 + (p2 - p0) / 6.0,
                control2: p2 - (p3 - p1) / 6.0,
                end: p2,
            }
        })
        .collect();
    CurvePath {
        start: points[0],
        segments,
    }
}
