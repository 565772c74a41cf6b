//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]. The page can override any subset of
//! fields with a JSON blob; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Upper bound on sparks per catch
pub const MAX_PARTICLES_PER_CATCH: u32 = 64;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Catches needed to win
    pub win_score: u32,
    /// Bernoulli spawn chance per tick (0.0 - 1.0)
    pub spawn_chance: f32,

    // === Paddle ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_offset: f32,

    // === Hearts (min, max) ===
    pub heart_size: (f32, f32),
    pub heart_speed: (f32, f32),
    pub heart_hue: (f32, f32),

    // === Sparks ===
    pub particles_per_catch: u32,
    pub particle_life: f32,
    pub particle_decay: f32,
    pub particle_size: (f32, f32),
    pub particle_spread: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            spawn_chance: SPAWN_CHANCE,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            heart_size: HEART_SIZE,
            heart_speed: HEART_SPEED,
            heart_hue: HEART_HUE,

            particles_per_catch: PARTICLES_PER_CATCH,
            particle_life: PARTICLE_LIFE,
            particle_decay: PARTICLE_DECAY,
            particle_size: PARTICLE_SIZE,
            particle_spread: PARTICLE_SPREAD,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validate())
    }

    /// Clamp values that would break the simulation
    pub fn validate(mut self) -> Self {
        self.win_score = self.win_score.max(1);
        self.spawn_chance = self.spawn_chance.clamp(0.0, 1.0);
        self.player_width = self.player_width.max(1.0);
        self.player_height = self.player_height.max(1.0);
        self.particle_life = self.particle_life.max(1.0);
        self.particles_per_catch = self.particles_per_catch.min(MAX_PARTICLES_PER_CATCH);
        // Zero decay would keep sparks alive forever
        if self.particle_decay <= 0.0 {
            self.particle_decay = PARTICLE_DECAY;
        }
        self.particle_spread = self.particle_spread.abs();
        self.heart_size = ordered(self.heart_size, 1.0);
        self.heart_speed = ordered(self.heart_speed, 0.1);
        self.heart_hue = ordered(self.heart_hue, 0.0);
        self.particle_size = ordered(self.particle_size, 0.5);
        self
    }
}

/// Sort a (min, max) pair and floor both ends
fn ordered((a, b): (f32, f32), floor: f32) -> (f32, f32) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo.max(floor), hi.max(floor))
}
