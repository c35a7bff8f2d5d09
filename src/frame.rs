//! Browser host: requestAnimationFrame scheduling and resize observation.
//!
//! Platform callbacks hold only a `Weak` reference to the renderer, so the
//! `RetroSwirl` handle owns the whole graph. The renderer's own teardown
//! cancels the frame request and detaches every listener before the closures
//! below are dropped.

use crate::constants::RESIZE_EVENT;
use crate::dom;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use swirl_core::{Host, Size, SizingStrategy, SwirlConfig, SwirlError, SwirlRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebRenderer = SwirlRenderer<WebHost, CanvasSurface>;

pub struct WebHost {
    window: web::Window,
    container: Option<web::Element>,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
    listening: bool,
    observer: Option<web::ResizeObserver>,
}

impl WebHost {
    fn new(
        window: web::Window,
        container: Option<web::Element>,
        renderer: Weak<RefCell<WebRenderer>>,
    ) -> Self {
        let frame_target = renderer.clone();
        let on_frame = Closure::wrap(Box::new(move |now: f64| {
            if let Some(r) = frame_target.upgrade() {
                if let Ok(mut r) = r.try_borrow_mut() {
                    r.on_frame(now);
                }
            }
        }) as Box<dyn FnMut(f64)>);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(r) = renderer.upgrade() {
                if let Ok(mut r) = r.try_borrow_mut() {
                    r.on_resize();
                }
            }
        }) as Box<dyn FnMut()>);
        Self {
            window,
            container,
            on_frame,
            on_resize,
            listening: false,
            observer: None,
        }
    }

    fn remove_window_listener(&mut self) {
        if self.listening {
            _ = self.window.remove_event_listener_with_callback(
                RESIZE_EVENT,
                self.on_resize.as_ref().unchecked_ref(),
            );
            self.listening = false;
        }
    }

    fn observe_container(&mut self) -> Result<(), SwirlError> {
        let Some(el) = self.container.as_ref() else {
            // No parent: sizing falls back to the viewport.
            return Ok(());
        };
        let observer = web::ResizeObserver::new(self.on_resize.as_ref().unchecked_ref())
            .map_err(|e| SwirlError::Observe(format!("{:?}", e)))?;
        observer.observe(el);
        self.observer = Some(observer);
        Ok(())
    }
}

impl Host for WebHost {
    type FrameToken = i32;

    fn viewport(&self) -> Size {
        dom::viewport_size(&self.window)
    }

    fn container(&self) -> Option<Size> {
        self.container.as_ref().map(dom::element_size)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(&self.window)
    }

    fn request_frame(&mut self) -> Result<i32, SwirlError> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .map_err(|e| SwirlError::Schedule(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, token: i32) {
        _ = self.window.cancel_animation_frame(token);
    }

    fn observe_resize(&mut self, strategy: SizingStrategy) -> Result<(), SwirlError> {
        self.window
            .add_event_listener_with_callback(RESIZE_EVENT, self.on_resize.as_ref().unchecked_ref())
            .map_err(|e| SwirlError::Observe(format!("{:?}", e)))?;
        self.listening = true;
        if strategy.observes_container() {
            if let Err(e) = self.observe_container() {
                // Leave nothing attached: the renderer will not call
                // `unobserve_resize` after a failed observe.
                self.remove_window_listener();
                return Err(e);
            }
        }
        Ok(())
    }

    fn unobserve_resize(&mut self) {
        self.remove_window_listener();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Mount a renderer on `canvas`. A missing canvas or 2D context produces an
/// inert renderer rather than an error; only a missing `window` fails.
pub fn mount_canvas(
    canvas: Option<web::HtmlCanvasElement>,
    config: SwirlConfig,
) -> anyhow::Result<Rc<RefCell<WebRenderer>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let container = canvas.as_ref().and_then(|c| c.parent_element());
    let surface = canvas.and_then(|c| match CanvasSurface::new(c) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("[swirl] {:?}", e);
            None
        }
    });
    Ok(Rc::new_cyclic(|weak| {
        let host = WebHost::new(window, container, weak.clone());
        RefCell::new(SwirlRenderer::mount(host, surface, config))
    }))
}
