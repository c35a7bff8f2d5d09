use crate::error::SwirlError;
use crate::sizing::{Size, SizingStrategy, SurfaceMetrics};
use crate::swirl::StrokeStyle;
use glam::DVec2;

/// Platform capabilities the renderer consumes: size queries, the
/// accessibility preference, frame scheduling and resize observation.
///
/// Implementations deliver frames by calling
/// [`SwirlRenderer::on_frame`](crate::SwirlRenderer::on_frame) and resize
/// signals by calling [`SwirlRenderer::on_resize`](crate::SwirlRenderer::on_resize).
pub trait Host {
    /// Handle for one pending frame request.
    type FrameToken: Copy + std::fmt::Debug;

    fn viewport(&self) -> Size;
    /// Size of the element containing the surface, if there is one.
    fn container(&self) -> Option<Size>;
    /// Ratio as reported by the platform; the renderer clamps it.
    fn device_pixel_ratio(&self) -> f64;
    fn prefers_reduced_motion(&self) -> bool;

    /// Ask for exactly one future frame callback.
    fn request_frame(&mut self) -> Result<Self::FrameToken, SwirlError>;
    fn cancel_frame(&mut self, token: Self::FrameToken);

    fn observe_resize(&mut self, strategy: SizingStrategy) -> Result<(), SwirlError>;
    fn unobserve_resize(&mut self);
}

/// A 2D drawing target addressed in logical pixels once resized.
pub trait Surface {
    /// Resize the backing store to `metrics.backing_size()`, set the displayed
    /// size to the logical size and scale the transform by the pixel ratio.
    fn resize(&mut self, metrics: &SurfaceMetrics) -> Result<(), SwirlError>;
    /// Paint black at `alpha` over the whole logical area.
    fn fill_trail(&mut self, size: Size, alpha: f64) -> Result<(), SwirlError>;
    /// Save the compositing state and switch to additive blending.
    fn begin_additive(&mut self) -> Result<(), SwirlError>;
    /// Restore the state saved by `begin_additive`.
    fn end_additive(&mut self) -> Result<(), SwirlError>;
    fn stroke_polyline(&mut self, style: &StrokeStyle, points: &[DVec2]) -> Result<(), SwirlError>;
}
