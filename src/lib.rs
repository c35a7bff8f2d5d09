#![cfg(target_arch = "wasm32")]
use crate::constants::{AUTO_MOUNT_SELECTOR, PAGEHIDE_EVENT, PAGESHOW_EVENT};
use crate::frame::WebRenderer;
use crate::page::{PageAction, PageEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod frame;
mod page;
mod surface;

thread_local! {
    // Renderers mounted from `data-retro-swirl` markup; torn down on pagehide
    // and mounted again when the page comes back from the back/forward cache.
    static AUTO_MOUNTED: RefCell<Vec<RetroSwirl>> = const { RefCell::new(Vec::new()) };
}

/// Handle to one mounted background. Freeing it unmounts.
#[wasm_bindgen]
pub struct RetroSwirl {
    renderer: Option<Rc<RefCell<WebRenderer>>>,
}

#[wasm_bindgen]
impl RetroSwirl {
    /// Stop the animation and release the frame request and observers.
    /// Calling it again is a no-op.
    pub fn unmount(&mut self) {
        if let Some(r) = self.renderer.take() {
            if let Ok(mut r) = r.try_borrow_mut() {
                r.unmount();
            }
        }
    }
}

impl Drop for RetroSwirl {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount_inner(canvas: Option<web::HtmlCanvasElement>, cfg: swirl_core::SwirlConfig) -> RetroSwirl {
    let renderer = match frame::mount_canvas(canvas, cfg) {
        Ok(r) => Some(r),
        Err(e) => {
            log::warn!("[swirl] mount skipped: {:?}", e);
            None
        }
    };
    RetroSwirl { renderer }
}

/// Mount the swirl background on `canvas` with a plain configuration object.
/// Never throws; an unusable canvas yields a handle that does nothing.
#[wasm_bindgen]
pub fn mount(canvas: JsValue, options: JsValue) -> RetroSwirl {
    let canvas = canvas.dyn_into::<web::HtmlCanvasElement>().ok();
    if canvas.is_none() {
        log::warn!("[swirl] mount target is not a canvas");
    }
    mount_inner(canvas, config::from_js(&options))
}

fn mount_marked(document: &web::Document) -> anyhow::Result<Vec<RetroSwirl>> {
    let nodes = document
        .query_selector_all(AUTO_MOUNT_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut handles = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let cfg = config::from_attributes(&el);
        handles.push(mount_inner(el.dyn_into::<web::HtmlCanvasElement>().ok(), cfg));
    }
    Ok(handles)
}

fn on_page_event(event: PageEvent) {
    let mounted = AUTO_MOUNTED.with(|m| m.borrow().len());
    match page::transition(event, mounted) {
        PageAction::Nothing => {}
        PageAction::UnmountAll => {
            // Drop outside the borrow; each handle unmounts as it goes.
            let drained: Vec<RetroSwirl> =
                AUTO_MOUNTED.with(|m| m.borrow_mut().drain(..).collect());
            drop(drained);
        }
        PageAction::Remount => {
            let Some(document) = dom::window_document() else {
                return;
            };
            match mount_marked(&document) {
                Ok(handles) => {
                    log::info!(
                        "[swirl] remounted {} canvas(es) after restore",
                        handles.len()
                    );
                    AUTO_MOUNTED.with(|m| m.borrow_mut().extend(handles));
                }
                Err(e) => log::warn!("[swirl] remount skipped: {:?}", e),
            }
        }
    }
}

fn auto_mount() -> anyhow::Result<usize> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let handles = mount_marked(&document)?;
    let count = handles.len();
    if count > 0 {
        AUTO_MOUNTED.with(|m| m.borrow_mut().extend(handles));
        dom::add_page_transition_listener(&window, PAGEHIDE_EVENT, |_| {
            on_page_event(PageEvent::Hide)
        });
        dom::add_page_transition_listener(&window, PAGESHOW_EVENT, |ev| {
            on_page_event(PageEvent::Show { persisted: ev.persisted() })
        });
    }
    Ok(count)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("retro-swirl starting");

    match auto_mount() {
        Ok(n) => log::info!("[swirl] auto-mounted {} canvas(es)", n),
        Err(e) => log::warn!("[swirl] auto-mount skipped: {:?}", e),
    }
    Ok(())
}
