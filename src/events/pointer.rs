use crate::input;
use crate::widget::Widget;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach pointer, touch, hover and resize listeners. Dropping the returned
/// listeners detaches them.
pub fn install(widget: &Rc<Widget>) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(5);
    let container = widget.container.clone();

    let weak = Rc::downgrade(widget);
    listeners.push(EventListener::new(&container, "pointermove", move |event| {
        let Some(w) = weak.upgrade() else { return };
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w.track(ev.client_x() as f64, ev.client_y() as f64);
    }));

    let weak = Rc::downgrade(widget);
    listeners.push(EventListener::new(&container, "touchmove", move |event| {
        let Some(w) = weak.upgrade() else { return };
        let Some((x, y)) = event
            .dyn_ref::<web::TouchEvent>()
            .and_then(input::first_touch)
        else {
            return;
        };
        w.track(x, y);
    }));

    let weak = Rc::downgrade(widget);
    listeners.push(EventListener::new(&container, "pointerenter", move |_| {
        if let Some(w) = weak.upgrade() {
            w.set_hovering(true);
        }
    }));

    let weak = Rc::downgrade(widget);
    listeners.push(EventListener::new(&container, "pointerleave", move |_| {
        if let Some(w) = weak.upgrade() {
            w.set_hovering(false);
        }
    }));

    if let Some(window) = web::window() {
        let weak = Rc::downgrade(widget);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            if let Some(w) = weak.upgrade() {
                w.schedule_resize();
            }
        }));
    }

    listeners
}
