use crate::constants::*;
use crate::events::{pointer, visibility};
use crate::surface::SvgSurface;
use crate::{dom, frame, input, style};
use blob_core::{
    AnimationDriver, BlobConfig, Debouncer, MountError, ScaleReconciler, Schedule, ShapeFrame,
    StyleParams, ViewportState, RESIZE_DEBOUNCE_MS, VIEWBOX_WIDTH,
};
use gloo::events::EventListener;
use gloo::render::AnimationFrame;
use gloo::timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// One mounted blob reveal.
///
/// Listener closures hold only weak references, so the handle returned by
/// [`Widget::mount`] owns the instance. [`Widget::release`] tears everything
/// down and may be called any number of times.
pub struct Widget {
    pub container: web::Element,
    pub surface: RefCell<SvgSurface>,
    pub driver: RefCell<AnimationDriver>,
    pub frame: RefCell<Option<AnimationFrame>>,
    config: BlobConfig,
    viewport: Cell<ViewportState>,
    scale: RefCell<ScaleReconciler>,
    style: RefCell<StyleParams>,
    resize: RefCell<Debouncer<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
    visibility: RefCell<Option<visibility::VisibilityWatch>>,
    page_visible: Cell<bool>,
    intersecting: Cell<bool>,
    released: Cell<bool>,
}

impl Widget {
    pub fn mount(selector: &str, config: BlobConfig) -> Result<Rc<Self>, MountError> {
        let window = web::window().ok_or(MountError::NoDocument)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let container = dom::require_in_document(&document, selector)?;
        let position = dom::require(&container, POSITION_SELECTOR)?;
        let scale = dom::require(&container, SCALE_SELECTOR)?;
        let shape = dom::require(&container, SHAPE_SELECTOR)?;
        let blur = dom::require_in_document(&document, BLUR_SELECTOR).ok();
        if blur.is_none() {
            log::debug!("[blob] no blur filter, skipping blur updates");
        }

        let widget = Rc::new(Self {
            container,
            surface: RefCell::new(SvgSurface::new(position, scale, shape, blur)),
            driver: RefCell::new(AnimationDriver::new(config).with_shape_frame(ShapeFrame::Local)),
            frame: RefCell::new(None),
            config,
            viewport: Cell::new(ViewportState::default()),
            scale: RefCell::new(ScaleReconciler::default()),
            style: RefCell::new(StyleParams::default()),
            resize: RefCell::new(Debouncer::new(RESIZE_DEBOUNCE_MS)),
            listeners: RefCell::new(Vec::new()),
            visibility: RefCell::new(None),
            page_visible: Cell::new(!document.hidden()),
            // corrected by the observer's first callback
            intersecting: Cell::new(true),
            released: Cell::new(false),
        });

        widget.refresh_layout(&window);
        *widget.listeners.borrow_mut() = pointer::install(&widget);
        *widget.visibility.borrow_mut() = Some(visibility::install(&widget, &document));
        widget.update_visibility();
        log::info!("[blob] mounted on {selector}");
        Ok(widget)
    }

    /// Re-read style variables and the container size, then reapply blur,
    /// smoothing and scale. Degenerate sizes keep the last applied scale.
    pub fn refresh_layout(&self, window: &web::Window) {
        let params = style::read(window);

        self.driver
            .borrow_mut()
            .set_smoothing(params.smoothing.unwrap_or(self.config.smoothing));

        if params.blur != self.style.borrow().blur {
            if let Some(blur) = &params.blur {
                self.surface.borrow().set_blur(blur);
            }
        }

        let viewport = input::measure(&self.container);
        self.viewport.set(viewport);
        let changed = self.scale.borrow_mut().update(
            params.size_px,
            self.config.shape_size(),
            VIEWBOX_WIDTH,
            viewport.width,
        );
        if let Some(scale) = changed {
            self.surface.borrow().set_scale(scale);
        }

        *self.style.borrow_mut() = params;
    }

    pub fn track(&self, client_x: f64, client_y: f64) {
        if self.released.get() {
            return;
        }
        if let Some(target) = input::client_to_internal(&self.container, client_x, client_y) {
            self.driver.borrow_mut().set_target(target);
        }
    }

    pub fn set_hovering(&self, hovering: bool) {
        if self.released.get() {
            return;
        }
        if hovering {
            self.viewport.set(input::measure(&self.container));
        }
        self.driver.borrow_mut().set_hovering(hovering);
        dom::set_class(&self.container, HOVER_CLASS, hovering);
    }

    /// Debounced resize: each call restarts the quiet period.
    pub fn schedule_resize(self: &Rc<Self>) {
        if self.released.get() {
            return;
        }
        let weak = Rc::downgrade(self);
        self.resize.borrow_mut().signal(|delay_ms| {
            Timeout::new(delay_ms, move || {
                let Some(w) = weak.upgrade() else { return };
                if !w.resize.borrow_mut().fire() {
                    return;
                }
                if let Some(window) = web::window() {
                    w.refresh_layout(&window);
                }
            })
        });
    }

    pub fn set_page_visible(self: &Rc<Self>, visible: bool) {
        self.page_visible.set(visible);
        self.update_visibility();
    }

    pub fn set_intersecting(self: &Rc<Self>, intersecting: bool) {
        self.intersecting.set(intersecting);
        self.update_visibility();
    }

    fn update_visibility(self: &Rc<Self>) {
        let visible = self.page_visible.get() && self.intersecting.get();
        let schedule = self.driver.borrow_mut().set_visible(visible);
        if schedule == Schedule::RequestFrame {
            frame::request(self);
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }

    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        self.driver.borrow_mut().release();
        self.frame.borrow_mut().take();
        self.resize.borrow_mut().cancel();
        self.listeners.borrow_mut().clear();
        self.visibility.borrow_mut().take();
        dom::set_class(&self.container, HOVER_CLASS, false);
        log::info!("[blob] released");
    }
}
