//! Browser surface backed by a `CanvasRenderingContext2d`

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of `canvas`
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn set_dash(&self, dash: &[f32]) -> Result<(), JsValue> {
        let segments: js_sys::Array = dash.iter().map(|&d| JsValue::from_f64(d as f64)).collect();
        self.ctx.set_line_dash(&segments)
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, area: Rect) -> Result<(), Self::Error> {
        self.ctx.clear_rect(
            area.left() as f64,
            area.top() as f64,
            area.size.x as f64,
            area.size.y as f64,
        );
        Ok(())
    }

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: &[f32],
        color: &str,
    ) -> Result<(), Self::Error> {
        self.ctx.set_stroke_style_str(color);
        self.set_dash(dash)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        // Later strokes are solid
        self.set_dash(&[])
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), Self::Error> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Vec2,
        font: &str,
        color: &str,
    ) -> Result<(), Self::Error> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, at.x as f64, at.y as f64)
    }
}
