use crate::widget::Widget;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page visibility listener plus an intersection observer on the container.
/// Dropping it stops both.
pub struct VisibilityWatch {
    _page: EventListener,
    observer: Option<web::IntersectionObserver>,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

pub fn install(widget: &Rc<Widget>, document: &web::Document) -> VisibilityWatch {
    let weak = Rc::downgrade(widget);
    let doc = document.clone();
    let page = EventListener::new(document, "visibilitychange", move |_| {
        if let Some(w) = weak.upgrade() {
            w.set_page_visible(!doc.hidden());
        }
    });

    let weak = Rc::downgrade(widget);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let Some(w) = weak.upgrade() else { return };
        // entries arrive oldest first
        let latest = entries
            .iter()
            .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            .last();
        if let Some(entry) = latest {
            w.set_intersecting(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let observer = match web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&widget.container);
            Some(observer)
        }
        Err(e) => {
            log::warn!("[visibility] IntersectionObserver unavailable: {:?}", e);
            None
        }
    };

    VisibilityWatch {
        _page: page,
        observer,
        _callback: callback,
    }
}
