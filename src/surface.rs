use crate::constants::ADDITIVE_COMPOSITE;
use crate::dom;
use glam::DVec2;
use swirl_core::{Size, StrokeStyle, Surface, SurfaceMetrics, SwirlError};
use wasm_bindgen::JsValue;
use web_sys as web;

fn js_err(e: JsValue) -> SwirlError {
    SwirlError::Surface(format!("{:?}", e))
}

/// A `<canvas>` and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, metrics: &SurfaceMetrics) -> Result<(), SwirlError> {
        let (w_px, h_px) = metrics.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", metrics.logical.width))
            .map_err(js_err)?;
        style
            .set_property("height", &format!("{}px", metrics.logical.height))
            .map_err(js_err)?;
        // Setting width/height resets the context, so the scale goes last.
        let r = metrics.pixel_ratio;
        self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0).map_err(js_err)
    }

    fn fill_trail(&mut self, size: Size, alpha: f64) -> Result<(), SwirlError> {
        self.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", alpha));
        self.ctx.fill_rect(0.0, 0.0, size.width, size.height);
        Ok(())
    }

    fn begin_additive(&mut self) -> Result<(), SwirlError> {
        self.ctx.save();
        self.ctx
            .set_global_composite_operation(ADDITIVE_COMPOSITE)
            .map_err(js_err)
    }

    fn end_additive(&mut self) -> Result<(), SwirlError> {
        self.ctx.restore();
        Ok(())
    }

    fn stroke_polyline(&mut self, style: &StrokeStyle, points: &[DVec2]) -> Result<(), SwirlError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.set_line_width(style.line_width);
        self.ctx.set_shadow_color(&style.shadow_color.to_string());
        self.ctx.set_shadow_blur(style.shadow_blur);
        self.ctx.set_stroke_style_str(&style.color.to_string());
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
        Ok(())
    }
}
