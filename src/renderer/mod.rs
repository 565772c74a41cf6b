//! 2D canvas rendering
//!
//! Entities are painted with immediate-mode path calls through the [`Canvas`]
//! trait. The browser implements it on `CanvasRenderingContext2d`
//! (see `platform::canvas2d`); [`RecordingCanvas`] captures the calls for tests
//! and the headless build.

pub mod recording;
pub mod shapes;

pub use recording::{DrawCommand, RecordingCanvas};
pub use shapes::{draw_heart, draw_particle, draw_player};

/// Immediate-mode 2D drawing surface
pub trait Canvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32);
    /// Clockwise arc around (x, y), angles in radians
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn set_global_alpha(&mut self, alpha: f32);
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE_FILL: &str = "#ff4d6d";
    pub const PADDLE_RIM: &str = "#c9184a";
    pub const SPARK: &str = "#ffffff";
}
