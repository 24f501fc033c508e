//! Browser backend over `CanvasRenderingContext2d`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{ColorStop, Surface};
use crate::error::{SceneError, SceneResult};
use crate::geometry::Point;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> SceneResult<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(SceneError::NoContext)?
            .dyn_into()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store. Resetting the width also wipes the bitmap
    /// and every context setting, so callers redraw afterwards.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_fill_radial(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        stops: &[ColorStop<'_>],
    ) -> SceneResult<()> {
        let gradient = self
            .ctx
            .create_radial_gradient(center.x, center.y, inner_radius, center.x, center.y, outer_radius)
            .map_err(|e| SceneError::surface(format!("radial gradient: {e:?}")))?;
        for stop in stops {
            gradient
                .add_color_stop(stop.offset as f32, stop.color)
                .map_err(|e| SceneError::surface(format!("color stop {:?}: {e:?}", stop.color)))?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> SceneResult<()> {
        self.ctx
            .arc(center.x, center.y, radius, start, end)
            .map_err(|e| SceneError::surface(format!("arc r={radius}: {e:?}")))
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
