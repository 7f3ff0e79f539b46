use crate::constants::CONNECTION_LINE_WIDTH;
use crate::core::{Rgb, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a 2D canvas context.
pub struct CanvasSurface {
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_disk(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.hex());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.rgba(alpha));
        self.ctx.set_line_width(CONNECTION_LINE_WIDTH);
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
    }
}
