// Shared fakes for host-side renderer tests: a scriptable host that queues
// frame requests instead of running them, and a surface that records calls.

#![allow(dead_code)]
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use swirl_core::*;

#[derive(Default)]
pub struct HostState {
    pub viewport: Size,
    pub container: Option<Size>,
    pub pixel_ratio: f64,
    pub reduced_motion: bool,
    pub fail_observe: bool,
    pub fail_schedule: bool,

    pub next_token: u32,
    pub queued: Vec<u32>,
    pub requests: u32,
    pub cancelled: Vec<u32>,
    pub observed: Option<SizingStrategy>,
    pub observe_calls: u32,
    pub unobserve_calls: u32,
}

#[derive(Clone, Default)]
pub struct FakeHost(pub Rc<RefCell<HostState>>);

impl FakeHost {
    pub fn new(viewport: Size) -> Self {
        let host = Self::default();
        {
            let mut s = host.0.borrow_mut();
            s.viewport = viewport;
            s.pixel_ratio = 1.0;
        }
        host
    }

    pub fn with_container(self, container: Size) -> Self {
        self.0.borrow_mut().container = Some(container);
        self
    }

    pub fn with_ratio(self, ratio: f64) -> Self {
        self.0.borrow_mut().pixel_ratio = ratio;
        self
    }

    pub fn with_reduced_motion(self) -> Self {
        self.0.borrow_mut().reduced_motion = true;
        self
    }

    /// Take every queued callback, as the platform would when a frame fires.
    pub fn take_queued(&self) -> Vec<u32> {
        std::mem::take(&mut self.0.borrow_mut().queued)
    }
}

impl Host for FakeHost {
    type FrameToken = u32;

    fn viewport(&self) -> Size {
        self.0.borrow().viewport
    }

    fn container(&self) -> Option<Size> {
        self.0.borrow().container
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.0.borrow().pixel_ratio
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.0.borrow().reduced_motion
    }

    fn request_frame(&mut self) -> Result<u32, SwirlError> {
        let mut s = self.0.borrow_mut();
        if s.fail_schedule {
            return Err(SwirlError::Schedule("scripted failure".into()));
        }
        s.next_token += 1;
        let token = s.next_token;
        s.queued.push(token);
        s.requests += 1;
        Ok(token)
    }

    // Deliberately leaves `queued` alone: a callback the platform already
    // queued may still fire after cancellation.
    fn cancel_frame(&mut self, token: u32) {
        self.0.borrow_mut().cancelled.push(token);
    }

    fn observe_resize(&mut self, strategy: SizingStrategy) -> Result<(), SwirlError> {
        let mut s = self.0.borrow_mut();
        s.observe_calls += 1;
        if s.fail_observe {
            return Err(SwirlError::Observe("scripted failure".into()));
        }
        s.observed = Some(strategy);
        Ok(())
    }

    fn unobserve_resize(&mut self) {
        let mut s = self.0.borrow_mut();
        s.unobserve_calls += 1;
        s.observed = None;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(SurfaceMetrics),
    Trail(Size, f64),
    BeginAdditive,
    EndAdditive,
    Stroke(StrokeStyle, Vec<DVec2>),
}

/// Records every call. Shared through `Arc<Mutex<_>>` so the same recorder
/// works on the render thread.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub ops: Arc<Mutex<Vec<Op>>>,
    pub fail_strokes: bool,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    pub fn strokes(&self) -> Vec<(StrokeStyle, Vec<DVec2>)> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Stroke(style, pts) => Some((style, pts)),
                _ => None,
            })
            .collect()
    }

    pub fn trail_count(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, Op::Trail(..)))
            .count()
    }

    /// Count of drawing calls (everything except resizes).
    pub fn draw_calls(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| !matches!(op, Op::Resize(_)))
            .count()
    }

    pub fn last_resize(&self) -> Option<SurfaceMetrics> {
        self.ops().into_iter().rev().find_map(|op| match op {
            Op::Resize(m) => Some(m),
            _ => None,
        })
    }

    fn push(&self, op: Op) {
        self.ops.lock().unwrap().push(op);
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, metrics: &SurfaceMetrics) -> Result<(), SwirlError> {
        self.push(Op::Resize(*metrics));
        Ok(())
    }

    fn fill_trail(&mut self, size: Size, alpha: f64) -> Result<(), SwirlError> {
        self.push(Op::Trail(size, alpha));
        Ok(())
    }

    fn begin_additive(&mut self) -> Result<(), SwirlError> {
        self.push(Op::BeginAdditive);
        Ok(())
    }

    fn end_additive(&mut self) -> Result<(), SwirlError> {
        self.push(Op::EndAdditive);
        Ok(())
    }

    fn stroke_polyline(&mut self, style: &StrokeStyle, points: &[DVec2]) -> Result<(), SwirlError> {
        if self.fail_strokes {
            return Err(SwirlError::Surface("context lost".into()));
        }
        self.push(Op::Stroke(*style, points.to_vec()));
        Ok(())
    }
}

pub type TestRenderer = SwirlRenderer<FakeHost, RecordingSurface>;

pub fn mount(host: &FakeHost, surface: &RecordingSurface, config: SwirlConfig) -> TestRenderer {
    SwirlRenderer::mount(host.clone(), Some(surface.clone()), config)
}

/// Deliver every queued frame callback at `now_ms`.
pub fn fire(renderer: &mut TestRenderer, host: &FakeHost, now_ms: f64) -> usize {
    let queued = host.take_queued();
    for _ in &queued {
        renderer.on_frame(now_ms);
    }
    queued.len()
}
