//! Draw routines for the catch-game entities

use std::f32::consts::{PI, TAU};

use super::{Canvas, colors};
use crate::sim::state::{Heart, Particle, Player};

/// Rim line width of the basket
const PADDLE_RIM_WIDTH: f32 = 5.0;
/// The rim sits this far above the bowl
const PADDLE_RIM_LIFT: f32 = 10.0;

/// Basket: a filled lower half-disc with a stroked upper rim
pub fn draw_player(canvas: &mut impl Canvas, player: &Player) {
    let cx = player.center_x();
    let radius = player.width / 2.0;

    canvas.set_fill_style(colors::PADDLE_FILL);
    canvas.begin_path();
    canvas.arc(cx, player.pos.y, radius, 0.0, PI);
    canvas.fill();

    canvas.set_stroke_style(colors::PADDLE_RIM);
    canvas.set_line_width(PADDLE_RIM_WIDTH);
    canvas.begin_path();
    canvas.arc(cx, player.pos.y - PADDLE_RIM_LIFT, radius, PI, 0.0);
    canvas.stroke();
}

/// Four cubic curves: left lobe, left flank, right flank, right lobe
pub fn draw_heart(canvas: &mut impl Canvas, heart: &Heart) {
    let (x, y, s) = (heart.pos.x, heart.pos.y, heart.size);
    let t = s * 0.3;
    let half = s / 2.0;
    let waist = y + (s + t) / 2.0;

    canvas.set_fill_style(&heart.color());
    canvas.begin_path();
    canvas.move_to(x, y + t);
    canvas.bezier_curve_to(x, y, x - half, y, x - half, y + t);
    canvas.bezier_curve_to(x - half, waist, x, waist, x, y + s);
    canvas.bezier_curve_to(x, waist, x + half, waist, x + half, y + t);
    canvas.bezier_curve_to(x + half, y, x, y, x, y + t);
    canvas.fill();
}

/// White dot faded by remaining life; alpha is restored afterwards
pub fn draw_particle(canvas: &mut impl Canvas, particle: &Particle) {
    canvas.set_global_alpha(particle.alpha());
    canvas.set_fill_style(colors::SPARK);
    canvas.begin_path();
    canvas.arc(particle.pos.x, particle.pos.y, particle.size, 0.0, TAU);
    canvas.fill();
    canvas.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};
    use glam::Vec2;

    #[test]
    fn test_heart_path_is_closed() {
        let mut canvas = RecordingCanvas::default();
        let heart = Heart {
            pos: Vec2::new(50.0, 10.0),
            size: 20.0,
            speed: 2.0,
            hue: 350.0,
        };
        draw_heart(&mut canvas, &heart);

        let curves: Vec<_> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::BezierCurveTo { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), 4);
        // Ends where it started
        assert_eq!(curves[3], (50.0, 16.0));
        // Bottom tip
        assert_eq!(curves[1], (50.0, 30.0));
        assert_eq!(canvas.fills(), 1);
    }

    #[test]
    fn test_particle_alpha_restored() {
        let mut canvas = RecordingCanvas::default();
        let particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 3.0,
            life: 40.0,
            max_life: 100.0,
        };
        draw_particle(&mut canvas, &particle);
        assert_eq!(canvas.commands.first(), Some(&DrawCommand::GlobalAlpha(0.4)));
        assert_eq!(canvas.commands.last(), Some(&DrawCommand::GlobalAlpha(1.0)));
    }

    #[test]
    fn test_player_bowl_and_rim() {
        let mut canvas = RecordingCanvas::default();
        let player = Player {
            pos: Vec2::new(100.0, 500.0),
            width: 100.0,
            height: 80.0,
            dx: 0.0,
        };
        draw_player(&mut canvas, &player);
        let arcs: Vec<_> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { x, y, radius, .. } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs, vec![(150.0, 500.0, 50.0), (150.0, 490.0, 50.0)]);
        assert_eq!(canvas.fills(), 1);
        assert_eq!(canvas.strokes(), 1);
    }
}
