use crate::widget::Widget;
use blob_core::Schedule;
use gloo::render::request_animation_frame;
use std::rc::Rc;

/// Request the next display frame for `widget`. The handle is kept on the
/// widget so that releasing it cancels the outstanding frame.
pub fn request(widget: &Rc<Widget>) {
    let weak = Rc::downgrade(widget);
    let handle = request_animation_frame(move |_timestamp| {
        if let Some(widget) = weak.upgrade() {
            tick(&widget);
        }
    });
    *widget.frame.borrow_mut() = Some(handle);
}

fn tick(widget: &Rc<Widget>) {
    widget.frame.borrow_mut().take();
    let schedule = {
        let mut surface = widget.surface.borrow_mut();
        widget.driver.borrow_mut().run_frame(&mut *surface)
    };
    if schedule == Schedule::RequestFrame {
        request(widget);
    }
}
