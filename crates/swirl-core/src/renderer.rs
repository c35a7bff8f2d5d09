//! The swirl renderer lifecycle.
//!
//! `SwirlRenderer` is driven entirely from outside: the host calls
//! [`SwirlRenderer::on_frame`] for every frame it was asked for and
//! [`SwirlRenderer::on_resize`] for every size change. The renderer asks for
//! its next frame only from inside the current one, so frames never overlap.

use crate::config::SwirlConfig;
use crate::constants::TRAIL_ALPHA;
use crate::error::SwirlError;
use crate::host::{Host, Surface};
use crate::sizing::{SizingStrategy, SurfaceMetrics};
use crate::swirl::{elapsed_seconds, FramePlan};
use glam::DVec2;

/// Why a mounted renderer is not animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticReason {
    ReducedMotion,
    ObserveFailed,
    ScheduleFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No usable surface; mount was a no-op.
    Inert,
    /// Sized but not animating.
    Static(StaticReason),
    Running,
    Unmounted,
}

pub struct SwirlRenderer<H: Host, S: Surface> {
    host: H,
    surface: Option<S>,
    config: SwirlConfig,
    strategy: SizingStrategy,
    metrics: SurfaceMetrics,
    phase: Phase,
    start_ms: Option<f64>,
    pending: Option<H::FrameToken>,
    observing: bool,
    frames_drawn: u64,
    points: Vec<DVec2>,
}

impl<H: Host, S: Surface> SwirlRenderer<H, S> {
    /// Size the surface, attach resize observation and start the frame loop.
    ///
    /// Never fails: a missing surface yields an [`Phase::Inert`] renderer, and
    /// reduced motion or a platform failure yields a [`Phase::Static`] one.
    pub fn mount(host: H, surface: Option<S>, config: SwirlConfig) -> Self {
        let strategy = config.strategy();
        let mut r = Self {
            host,
            surface,
            config,
            strategy,
            metrics: SurfaceMetrics::default(),
            phase: Phase::Inert,
            start_ms: None,
            pending: None,
            observing: false,
            frames_drawn: 0,
            points: Vec::new(),
        };
        if r.surface.is_none() {
            log::warn!("[swirl] no drawable surface; mount is a no-op");
            return r;
        }

        r.apply_size();

        if let Err(e) = r.host.observe_resize(strategy) {
            log::warn!("[swirl] {}; falling back to a static background", e);
            r.phase = Phase::Static(StaticReason::ObserveFailed);
            return r;
        }
        r.observing = true;

        if r.config.respect_reduced_motion && r.host.prefers_reduced_motion() {
            log::info!("[swirl] reduced motion requested; animation disabled");
            r.phase = Phase::Static(StaticReason::ReducedMotion);
            return r;
        }

        r.phase = Phase::Running;
        r.schedule();
        log::info!(
            "[swirl] mounted: {:?} {}x{} @{}x density={}",
            r.strategy,
            r.metrics.logical.width,
            r.metrics.logical.height,
            r.metrics.pixel_ratio,
            r.config.density
        );
        r
    }

    /// Recompute size and pixel ratio and resize the backing store.
    pub fn on_resize(&mut self) {
        if matches!(self.phase, Phase::Inert | Phase::Unmounted) {
            return;
        }
        self.apply_size();
    }

    /// Paint one frame at host timestamp `now_ms` and request the next.
    ///
    /// Callbacks that arrive after the loop stopped (for example one already
    /// queued when `unmount` ran) draw nothing.
    pub fn on_frame(&mut self, now_ms: f64) {
        if self.phase != Phase::Running {
            return;
        }
        self.pending = None;
        let start = *self.start_ms.get_or_insert(now_ms);
        let t = elapsed_seconds(now_ms, start, self.config.speed);
        match self.paint(t) {
            Ok(()) => self.frames_drawn += 1,
            Err(e) => log::debug!("[swirl] frame skipped: {}", e),
        }
        self.schedule();
    }

    /// Cancel the pending frame and detach resize observation. Safe to call
    /// any number of times, from any phase.
    pub fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        if let Some(token) = self.pending.take() {
            self.host.cancel_frame(token);
        }
        if self.observing {
            self.host.unobserve_resize();
            self.observing = false;
        }
        self.phase = Phase::Unmounted;
        log::info!("[swirl] unmounted after {} frames", self.frames_drawn);
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[inline]
    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    #[inline]
    pub fn config(&self) -> &SwirlConfig {
        &self.config
    }

    #[inline]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    fn apply_size(&mut self) {
        let metrics = SurfaceMetrics::compute(
            self.strategy,
            self.host.viewport(),
            self.host.container(),
            self.host.device_pixel_ratio(),
        );
        if let Some(surface) = self.surface.as_mut() {
            if let Err(e) = surface.resize(&metrics) {
                log::warn!("[swirl] resize failed: {}", e);
            }
        }
        log::debug!(
            "[swirl] size {}x{} ratio {}",
            metrics.logical.width,
            metrics.logical.height,
            metrics.pixel_ratio
        );
        self.metrics = metrics;
    }

    fn schedule(&mut self) {
        match self.host.request_frame() {
            Ok(token) => self.pending = Some(token),
            Err(e) => {
                log::warn!("[swirl] {}; animation stopped", e);
                self.phase = Phase::Static(StaticReason::ScheduleFailed);
            }
        }
    }

    fn paint(&mut self, t: f64) -> Result<(), SwirlError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let plan = FramePlan::new(&self.config, self.metrics.logical, t);
        surface.fill_trail(plan.size, TRAIL_ALPHA)?;
        surface.begin_additive()?;
        let stroked = stroke_curves(surface, &plan, &mut self.points);
        // Restore blending even when a stroke failed mid-frame.
        let restored = surface.end_additive();
        stroked.and(restored)
    }
}

impl<H: Host, S: Surface> Drop for SwirlRenderer<H, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn stroke_curves<S: Surface>(
    surface: &mut S,
    plan: &FramePlan,
    points: &mut Vec<DVec2>,
) -> Result<(), SwirlError> {
    for curve in &plan.curves {
        curve.trace_into(plan.center, plan.base_radius, points);
        surface.stroke_polyline(&curve.style(plan.glow), points)?;
    }
    Ok(())
}
