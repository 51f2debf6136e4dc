use blob_core::MountError;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First descendant of `root` matching `selector`.
pub fn require(root: &web::Element, selector: &str) -> Result<web::Element, MountError> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| MountError::MissingElement(selector.to_string()))
}

pub fn require_in_document(
    document: &web::Document,
    selector: &str,
) -> Result<web::Element, MountError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| MountError::MissingElement(selector.to_string()))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
