//! Game state and core simulation types
//!
//! Everything the frame tick reads or writes lives here. Randomness comes only
//! from the seeded RNG owned by [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the catch game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    #[default]
    Start,
    /// Hearts falling, paddle live
    Playing,
}

/// Drawing surface dimensions (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Uniform sample in `[lo, hi)`; tolerates an empty range
pub(crate) fn sample_range(rng: &mut Pcg32, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

/// The player's basket paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; y is the catch line
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal drift added every tick
    pub dx: f32,
}

impl Player {
    /// Centered horizontally, anchored above the bottom edge
    pub fn new(surface: Surface, tuning: &Tuning) -> Self {
        let width = tuning.player_width;
        Self {
            pos: Vec2::new(
                surface.width / 2.0 - width / 2.0,
                surface.height - tuning.player_bottom_offset,
            ),
            width,
            height: tuning.player_height,
            dx: 0.0,
        }
    }

    /// Re-anchor the catch line after a resize
    pub fn anchor(&mut self, surface: Surface, bottom_offset: f32) {
        self.pos.y = surface.height - bottom_offset;
    }

    /// Apply the latest pointer target, drift, then clamp to the surface
    pub fn update(&mut self, target_x: Option<f32>, surface: Surface) {
        if let Some(x) = target_x {
            self.pos.x = x;
        }
        self.pos.x += self.dx;
        self.pos.x = self.pos.x.min(surface.width - self.width).max(0.0);
    }

    /// Right edge (exclusive) of the paddle
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Horizontal center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A falling heart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    /// Top tip of the heart shape (x is the horizontal center)
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per tick
    pub speed: f32,
    /// HSL hue in degrees
    pub hue: f32,
}

impl Heart {
    /// Spawn just above the top edge at a random column
    pub fn spawn(rng: &mut Pcg32, surface: Surface, tuning: &Tuning) -> Self {
        let size = sample_range(rng, tuning.heart_size);
        let speed = sample_range(rng, tuning.heart_speed);
        let hue = sample_range(rng, tuning.heart_hue);
        let x = rng.random::<f32>() * (surface.width - size);
        Self {
            pos: Vec2::new(x, -size),
            size,
            speed,
            hue,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.speed;
    }

    /// Lowest point of the shape
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// CSS color string
    pub fn color(&self) -> String {
        format!("hsl({:.1},100%,60%)", self.hue)
    }
}

/// A catch spark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Remaining life, counts down from `max_life`
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub fn spawn(rng: &mut Pcg32, pos: Vec2, tuning: &Tuning) -> Self {
        let size = sample_range(rng, tuning.particle_size);
        let spread = tuning.particle_spread;
        let vx = sample_range(rng, (-spread, spread));
        let vy = sample_range(rng, (-spread, spread));
        Self {
            pos,
            vel: Vec2::new(vx, vy),
            size,
            life: tuning.particle_life,
            max_life: tuning.particle_life,
        }
    }

    pub fn update(&mut self, decay: f32) {
        self.pos += self.vel;
        self.life -= decay;
    }

    /// Opacity derived from remaining life
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Complete catch-game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub surface: Surface,
    /// Only present while playing
    pub player: Option<Player>,
    /// Live hearts in spawn order
    pub hearts: Vec<Heart>,
    /// Live sparks in spawn order
    pub particles: Vec<Particle>,
    /// Hearts caught so far
    pub score: u32,
    /// Simulated ticks
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, surface: Surface, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Start,
            surface,
            player: None,
            hearts: Vec::new(),
            particles: Vec::new(),
            score: 0,
            time_ticks: 0,
        }
    }

    /// Enter the playing phase; creates the paddle if there is none.
    /// Returns true when a new paddle was created.
    pub fn begin_play(&mut self) -> bool {
        self.phase = GamePhase::Playing;
        if self.player.is_some() {
            return false;
        }
        self.player = Some(Player::new(self.surface, &self.tuning));
        true
    }

    /// Drop the paddle (view teardown)
    pub fn end_play(&mut self) {
        self.player = None;
    }

    /// Track a new surface size and re-anchor the paddle
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        let offset = self.tuning.player_bottom_offset;
        if let Some(player) = self.player.as_mut() {
            player.anchor(surface, offset);
        }
    }

    /// Whether the simulation should advance this tick
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Playing && self.player.is_some()
    }
}
