//! Confetti burst for the "Yes" answer
//!
//! Pieces launch from a point on the viewport in a fan around straight up,
//! slow down, fall, and fade out over a fixed number of frames. The show runs
//! its own frame loop on an overlay canvas, independent of the current screen.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::proposal::ConfettiBurst;
use crate::renderer::Canvas;
use crate::session::FrameScheduler;
use crate::sim::Surface;

/// Launch speed range is [0.5, 1.5] times this
const START_VELOCITY: f32 = 45.0;
/// Velocity kept per frame
const DECAY: f32 = 0.9;
/// Fall per frame
const GRAVITY: f32 = 3.0;
/// Frames each piece lives
const LIFETIME: u32 = 200;
/// Piece radius range (min, max)
const PIECE_SIZE: (f32, f32) = (3.0, 6.0);

/// Piece colors
pub const PALETTE: [&str; 7] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

/// One piece of confetti
#[derive(Debug, Clone)]
pub struct ConfettiPiece {
    pub pos: Vec2,
    /// Heading in radians, canvas coordinates (y down)
    pub heading: f32,
    pub velocity: f32,
    pub size: f32,
    pub color: &'static str,
    /// Frames lived
    pub age: u32,
}

impl ConfettiPiece {
    fn launch(rng: &mut Pcg32, origin: Vec2, spread_deg: f32) -> Self {
        let spread = spread_deg.to_radians();
        let heading = -FRAC_PI_2 + (0.5 * spread - rng.random::<f32>() * spread);
        let velocity = START_VELOCITY * 0.5 + rng.random::<f32>() * START_VELOCITY;
        let size = PIECE_SIZE.0 + rng.random::<f32>() * (PIECE_SIZE.1 - PIECE_SIZE.0);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        Self {
            pos: origin,
            heading,
            velocity,
            size,
            color,
            age: 0,
        }
    }

    fn update(&mut self) {
        self.pos += Vec2::from_angle(self.heading) * self.velocity + Vec2::new(0.0, GRAVITY);
        self.velocity *= DECAY;
        self.age += 1;
    }

    pub fn opacity(&self) -> f32 {
        1.0 - (self.age as f32 / LIFETIME as f32).min(1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.age < LIFETIME
    }
}

/// A running confetti overlay
pub struct ConfettiShow<S: FrameScheduler> {
    rng: Pcg32,
    surface: Surface,
    pieces: Vec<ConfettiPiece>,
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> ConfettiShow<S> {
    pub fn new(seed: u64, surface: Surface, scheduler: S) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            surface,
            pieces: Vec::new(),
            scheduler,
            pending: None,
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Whether a frame callback is pending
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Launch a burst from horizontal center at `origin_y` of the surface.
    /// Starts the loop if it is idle; a running loop just picks up the pieces.
    pub fn fire(&mut self, burst: &ConfettiBurst) {
        let origin = Vec2::new(
            self.surface.width * 0.5,
            self.surface.height * burst.origin_y,
        );
        let rng = &mut self.rng;
        self.pieces.extend(
            (0..burst.particle_count).map(|_| ConfettiPiece::launch(rng, origin, burst.spread)),
        );
        log::debug!("Confetti: {} pieces live", self.pieces.len());

        if self.pending.is_none() {
            self.pending = self.scheduler.request();
        }
    }

    /// Frame callback: advance and paint every piece, and keep the loop going
    /// while any are left. Returns the number of live pieces.
    pub fn frame(&mut self, canvas: &mut impl Canvas) -> usize {
        if self.pending.take().is_none() {
            return self.pieces.len();
        }

        canvas.clear_rect(0.0, 0.0, self.surface.width, self.surface.height);
        self.pieces.retain_mut(|piece| {
            piece.update();
            if !piece.is_alive() {
                return false;
            }
            canvas.set_global_alpha(piece.opacity());
            canvas.set_fill_style(piece.color);
            canvas.begin_path();
            canvas.arc(piece.pos.x, piece.pos.y, piece.size, 0.0, std::f32::consts::TAU);
            canvas.fill();
            true
        });
        canvas.set_global_alpha(1.0);

        if !self.pieces.is_empty() {
            self.pending = self.scheduler.request();
        }
        self.pieces.len()
    }
}

impl<S: FrameScheduler> Drop for ConfettiShow<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};
    use crate::session::ManualScheduler;

    fn show() -> ConfettiShow<ManualScheduler> {
        ConfettiShow::new(8, Surface::new(800.0, 600.0), ManualScheduler::new())
    }

    fn pump(show: &mut ConfettiShow<ManualScheduler>, canvas: &mut RecordingCanvas) -> Option<usize> {
        show.scheduler_mut().fire()?;
        Some(show.frame(canvas))
    }

    #[test]
    fn test_fire_launches_burst_from_origin() {
        let mut s = show();
        s.fire(&ConfettiBurst::YES);
        assert_eq!(s.pieces().len(), 260);
        assert_eq!(s.scheduler().outstanding(), 1);
        for piece in s.pieces() {
            assert!((piece.pos - Vec2::new(400.0, 390.0)).length() < 1e-3);
            // Within 60 degrees of straight up
            assert!((piece.heading + FRAC_PI_2).abs() <= 60f32.to_radians() + 1e-4);
            assert!((22.5..=67.5).contains(&piece.velocity));
        }
    }

    #[test]
    fn test_pieces_rise_first() {
        let mut s = show();
        s.fire(&ConfettiBurst::YES);
        pump(&mut s, &mut RecordingCanvas::default());
        assert!(s.pieces().iter().all(|p| p.pos.y < 390.0));
    }

    #[test]
    fn test_second_fire_keeps_one_loop() {
        let mut s = show();
        s.fire(&ConfettiBurst::YES);
        s.fire(&ConfettiBurst::YES);
        assert_eq!(s.pieces().len(), 520);
        assert_eq!(s.scheduler().outstanding(), 1);
    }

    #[test]
    fn test_show_ends_after_lifetime() {
        let mut s = show();
        s.fire(&ConfettiBurst::YES);
        let mut canvas = RecordingCanvas::default();
        let mut frames = 0;
        while let Some(live) = pump(&mut s, &mut canvas) {
            frames += 1;
            if live > 0 {
                canvas.clear();
            }
        }
        assert_eq!(frames, LIFETIME);
        assert!(s.pieces().is_empty());
        assert!(!s.is_running());
        // The last frame wipes the overlay and draws nothing
        assert_eq!(canvas.fills(), 0);
        assert!(matches!(canvas.commands[0], DrawCommand::ClearRect { .. }));
    }

    #[test]
    fn test_opacity_fades() {
        let mut s = show();
        s.fire(&ConfettiBurst {
            particle_count: 1,
            spread: 0.0,
            origin_y: 0.5,
        });
        let mut canvas = RecordingCanvas::default();
        pump(&mut s, &mut canvas);
        let early = s.pieces()[0].opacity();
        for _ in 0..100 {
            pump(&mut s, &mut canvas);
        }
        assert!(s.pieces()[0].opacity() < early);
        assert!((s.pieces()[0].opacity() - 0.495).abs() < 1e-4);
    }

    #[test]
    fn test_frame_without_pending_is_inert() {
        let mut s = show();
        let mut canvas = RecordingCanvas::default();
        assert_eq!(s.frame(&mut canvas), 0);
        assert!(canvas.commands.is_empty());
    }
}
