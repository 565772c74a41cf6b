//! `CanvasRenderingContext2d` as a drawing surface

use web_sys::CanvasRenderingContext2d;

use crate::renderer::Canvas;

impl Canvas for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::clear_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        CanvasRenderingContext2d::move_to(self, x as f64, y as f64);
    }

    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        CanvasRenderingContext2d::bezier_curve_to(
            self,
            cp1x as f64,
            cp1y as f64,
            cp2x as f64,
            cp2y as f64,
            x as f64,
            y as f64,
        );
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        // Only fails on a negative radius
        let _ = CanvasRenderingContext2d::arc(
            self,
            x as f64,
            y as f64,
            radius.max(0.0) as f64,
            start as f64,
            end as f64,
        );
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f32) {
        CanvasRenderingContext2d::set_line_width(self, width as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha as f64);
    }
}
