use blob_core::{Point2D, ViewportState};
use web_sys as web;

/// Pointer position relative to the container's top-left corner, in CSS pixels.
#[inline]
pub fn offset_in_rect(client_x: f64, client_y: f64, left: f64, top: f64) -> Point2D {
    Point2D::new(client_x - left, client_y - top)
}

/// Map client coordinates through a container rect (left, top, width, height)
/// into the internal coordinate space. `None` when the rect has no area.
#[inline]
pub fn map_client(client_x: f64, client_y: f64, rect: [f64; 4]) -> Option<Point2D> {
    let [left, top, width, height] = rect;
    ViewportState::new(width, height).map_to_internal(offset_in_rect(client_x, client_y, left, top))
}

/// Map client coordinates using a single fresh read of the container rect,
/// so position and size always agree even mid-resize.
#[inline]
pub fn client_to_internal(
    container: &web::Element,
    client_x: f64,
    client_y: f64,
) -> Option<Point2D> {
    let rect = container.get_bounding_client_rect();
    map_client(
        client_x,
        client_y,
        [rect.left(), rect.top(), rect.width(), rect.height()],
    )
}

#[inline]
pub fn measure(container: &web::Element) -> ViewportState {
    let rect = container.get_bounding_client_rect();
    ViewportState::new(rect.width(), rect.height())
}

/// Client position of the first active touch.
#[inline]
pub fn first_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}
