//! Native driver: the renderer on a dedicated thread.
//!
//! Without a platform "next frame" primitive the self-chaining loop becomes a
//! thread that sleeps a fixed interval between frames. A pending frame request
//! is just a flag on the thread-local host, and cancellation is the shared
//! `running` flag checked at the top of every iteration.

use crate::config::SwirlConfig;
use crate::constants::NATIVE_FRAME_INTERVAL_MS;
use crate::error::SwirlError;
use crate::host::{Host, Surface};
use crate::renderer::SwirlRenderer;
use crate::sizing::{Size, SizingStrategy};
use instant::Instant;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Platform facts the render thread reads on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformState {
    pub viewport: Size,
    pub container: Option<Size>,
    pub pixel_ratio: f64,
    pub reduced_motion: bool,
}

impl PlatformState {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            container: None,
            pixel_ratio: 1.0,
            reduced_motion: false,
        }
    }
}

fn lock(state: &Mutex<PlatformState>) -> MutexGuard<'_, PlatformState> {
    // Plain data: a panicked writer cannot leave it half-updated.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct ThreadHost {
    platform: Arc<Mutex<PlatformState>>,
    pending: Option<u64>,
    next_token: u64,
}

impl Host for ThreadHost {
    type FrameToken = u64;

    fn viewport(&self) -> Size {
        lock(&self.platform).viewport
    }

    fn container(&self) -> Option<Size> {
        lock(&self.platform).container
    }

    fn device_pixel_ratio(&self) -> f64 {
        lock(&self.platform).pixel_ratio
    }

    fn prefers_reduced_motion(&self) -> bool {
        lock(&self.platform).reduced_motion
    }

    fn request_frame(&mut self) -> Result<u64, SwirlError> {
        self.next_token += 1;
        self.pending = Some(self.next_token);
        Ok(self.next_token)
    }

    fn cancel_frame(&mut self, token: u64) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    // Resize signals arrive through `SwirlThread::resize` for both strategies.
    fn observe_resize(&mut self, _strategy: SizingStrategy) -> Result<(), SwirlError> {
        Ok(())
    }

    fn unobserve_resize(&mut self) {}
}

pub struct SwirlThread {
    running: Arc<AtomicBool>,
    resized: Arc<AtomicBool>,
    frames: Arc<AtomicU64>,
    platform: Arc<Mutex<PlatformState>>,
    handle: Option<JoinHandle<()>>,
}

impl SwirlThread {
    /// Mount a renderer on a new thread and start painting every `interval`.
    pub fn spawn<S>(
        surface: S,
        config: SwirlConfig,
        platform: PlatformState,
        interval: Duration,
    ) -> Self
    where
        S: Surface + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let resized = Arc::new(AtomicBool::new(false));
        let frames = Arc::new(AtomicU64::new(0));
        let platform = Arc::new(Mutex::new(platform));

        let running_t = running.clone();
        let resized_t = resized.clone();
        let frames_t = frames.clone();
        let platform_t = platform.clone();
        let spawned = thread::Builder::new()
            .name("swirl-render".into())
            .spawn(move || {
                let host = ThreadHost {
                    platform: platform_t,
                    pending: None,
                    next_token: 0,
                };
                let mut renderer = SwirlRenderer::mount(host, Some(surface), config);
                let clock = Instant::now();
                while running_t.load(Ordering::Acquire) {
                    if resized_t.swap(false, Ordering::AcqRel) {
                        renderer.on_resize();
                    }
                    if renderer.host().pending.is_none() {
                        break;
                    }
                    renderer.on_frame(clock.elapsed().as_secs_f64() * 1000.0);
                    frames_t.store(renderer.frames_drawn(), Ordering::Release);
                    thread::sleep(interval);
                }
                renderer.unmount();
            });

        let handle = match spawned {
            Ok(h) => Some(h),
            Err(e) => {
                log::warn!("[swirl] render thread failed to start: {}", e);
                running.store(false, Ordering::Release);
                None
            }
        };
        Self {
            running,
            resized,
            frames,
            platform,
            handle,
        }
    }

    /// [`SwirlThread::spawn`] paced at roughly 60 frames per second.
    pub fn spawn_default<S>(surface: S, config: SwirlConfig, platform: PlatformState) -> Self
    where
        S: Surface + Send + 'static,
    {
        Self::spawn(
            surface,
            config,
            platform,
            Duration::from_millis(NATIVE_FRAME_INTERVAL_MS),
        )
    }

    /// Publish new platform sizes; the render thread applies them before its
    /// next frame.
    pub fn resize(&self, viewport: Size, container: Option<Size>) {
        {
            let mut p = lock(&self.platform);
            p.viewport = viewport;
            p.container = container;
        }
        self.resized.store(true, Ordering::Release);
    }

    pub fn set_pixel_ratio(&self, ratio: f64) {
        lock(&self.platform).pixel_ratio = ratio;
        self.resized.store(true, Ordering::Release);
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the loop and wait for the thread. No frame runs after this returns.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("[swirl] render thread panicked");
            }
        }
    }
}

impl Drop for SwirlThread {
    fn drop(&mut self) {
        self.stop();
    }
}
