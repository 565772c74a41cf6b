//! Canvas that records draw calls instead of painting

use super::Canvas;

/// A single recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    BezierCurveTo { cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32 },
    Arc { x: f32, y: f32, radius: f32, start: f32, end: f32 },
    Fill,
    Stroke,
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    GlobalAlpha(f32),
}

/// In-memory canvas used by tests and the native build
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of filled shapes
    pub fn fills(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Fill))
    }

    /// Number of stroked shapes
    pub fn strokes(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Stroke))
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        self.commands.push(DrawCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }
}
