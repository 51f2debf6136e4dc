use blob_core::StyleParams;
use web_sys as web;

/// Read the blob's CSS custom properties from the document root.
pub fn read(window: &web::Window) -> StyleParams {
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return StyleParams::default();
    };
    match window.get_computed_style(&root) {
        Ok(Some(decl)) => StyleParams::from_lookup(|name| decl.get_property_value(name).ok()),
        _ => {
            log::debug!("[style] computed style unavailable");
            StyleParams::default()
        }
    }
}
