#![cfg(target_arch = "wasm32")]
use blob_core::BlobConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod style;
mod surface;
mod widget;

use widget::Widget;

/// Construction-time shape and motion options. Unset fields keep their defaults.
#[wasm_bindgen]
#[derive(Clone, Copy, Default)]
pub struct BlobOptions {
    config: BlobConfig,
}

#[wasm_bindgen]
impl BlobOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BlobOptions {
        Self::default()
    }

    pub fn radius(self, radius: f64) -> BlobOptions {
        Self {
            config: self.config.with_radius(radius),
        }
    }

    #[wasm_bindgen(js_name = pointCount)]
    pub fn point_count(self, count: u32) -> BlobOptions {
        Self {
            config: self.config.with_point_count(count as usize),
        }
    }

    pub fn wobble(self, amplitude: f64, speed: f64) -> BlobOptions {
        Self {
            config: self.config.with_wobble(amplitude, speed),
        }
    }

    pub fn smoothing(self, factor: f64) -> BlobOptions {
        Self {
            config: self.config.with_smoothing(factor),
        }
    }
}

/// Handle to a mounted blob. An inert handle is returned when the page lacks
/// the required elements; every method on it is a no-op.
#[wasm_bindgen]
pub struct BlobReveal {
    widget: Option<Rc<Widget>>,
}

#[wasm_bindgen]
impl BlobReveal {
    pub fn mount(selector: &str, options: Option<BlobOptions>) -> BlobReveal {
        let config = options
            .unwrap_or_default()
            .config
            .validate()
            .unwrap_or_else(|e| {
                log::warn!("[blob-image-reveal] invalid options ({e}), using defaults");
                BlobConfig::default()
            });
        match Widget::mount(selector, config) {
            Ok(widget) => BlobReveal {
                widget: Some(widget),
            },
            Err(e) => {
                log::warn!("[blob-image-reveal] {e}; staying inert");
                BlobReveal { widget: None }
            }
        }
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.widget.as_ref().is_some_and(|w| !w.is_released())
    }

    /// Stop animating and detach every listener. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(widget) = self.widget.take() {
            widget.release();
        }
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<BlobReveal>> = const { RefCell::new(None) };
}

/// Release the instance mounted automatically at startup, if any.
#[wasm_bindgen(js_name = releaseAutoMounted)]
pub fn release_auto_mounted() {
    let handle = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take());
    if let Some(mut handle) = handle {
        handle.release();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-reveal starting");

    if let Err(e) = auto_mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document
        .query_selector(constants::CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .is_none()
    {
        log::warn!("[blob-image-reveal] Required DOM elements not found");
        return Ok(());
    }
    let handle = BlobReveal::mount(constants::CONTAINER_SELECTOR, None);
    AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}
