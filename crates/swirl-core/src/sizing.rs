use crate::constants::{PIXEL_RATIO_MAX, PIXEL_RATIO_MIN};

/// Width and height in logical (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self::new(fix(self.width), fix(self.height))
    }
}

/// How the logical size is derived, chosen once from `fixed` at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizingStrategy {
    /// Locked to the viewport.
    Viewport,
    /// Follows the parent container, clamped so the center never drifts
    /// below the fold.
    Container,
}

impl SizingStrategy {
    #[inline]
    pub fn from_fixed(fixed: bool) -> Self {
        if fixed {
            SizingStrategy::Viewport
        } else {
            SizingStrategy::Container
        }
    }

    /// Whether the container element must be observed in addition to the
    /// window resize signal.
    #[inline]
    pub fn observes_container(self) -> bool {
        matches!(self, SizingStrategy::Container)
    }

    pub fn logical_size(self, viewport: Size, container: Option<Size>) -> Size {
        let viewport = viewport.sanitized();
        match (self, container) {
            (SizingStrategy::Container, Some(c)) => {
                let c = c.sanitized();
                Size::new(c.width.max(viewport.width), c.height.min(viewport.height))
            }
            _ => viewport,
        }
    }
}

/// Clamp a reported device pixel ratio into `[1, 2]`. Missing or garbage
/// ratios count as 1.
#[inline]
pub fn clamp_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio.clamp(PIXEL_RATIO_MIN, PIXEL_RATIO_MAX)
    } else {
        PIXEL_RATIO_MIN
    }
}

/// Logical size plus the clamped pixel ratio the backing store is scaled by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub logical: Size,
    pub pixel_ratio: f64,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            logical: Size::default(),
            pixel_ratio: PIXEL_RATIO_MIN,
        }
    }
}

impl SurfaceMetrics {
    pub fn compute(
        strategy: SizingStrategy,
        viewport: Size,
        container: Option<Size>,
        reported_ratio: f64,
    ) -> Self {
        Self {
            logical: strategy.logical_size(viewport, container),
            pixel_ratio: clamp_pixel_ratio(reported_ratio),
        }
    }

    /// Backing store size in device pixels, `floor(logical * ratio)`.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.logical.width * self.pixel_ratio).floor() as u32,
            (self.logical.height * self.pixel_ratio).floor() as u32,
        )
    }
}
