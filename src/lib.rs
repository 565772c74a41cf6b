//! Heart Catch - a falling-hearts mini-game in front of a Valentine proposal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawn/catch policy, frame tick)
//! - `renderer`: 2D canvas drawing surface and entity draw routines
//! - `session`: Frame loop lifecycle (start/stop, scheduling, win detection)
//! - `input`: Pointer/touch to paddle translation
//! - `platform`: Browser glue (canvas context, requestAnimationFrame, DOM guards)
//! - `tuning`: Data-driven game balance
//! - `ui`: Proposal flow state (routes, no-button, carousel, letter, confetti)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;
pub mod win;

pub use session::{FrameReport, FrameScheduler, GameSession, ManualScheduler};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Catches needed to unlock the proposal
    pub const WIN_SCORE: u32 = 15;

    /// Chance per tick that a new heart spawns
    pub const SPAWN_CHANCE: f32 = 0.02;

    /// Paddle defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Paddle y is anchored this far above the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Heart ranges (min, max)
    pub const HEART_SIZE: (f32, f32) = (20.0, 40.0);
    pub const HEART_SPEED: (f32, f32) = (2.0, 5.0);
    /// Warm pink/red hue band in degrees
    pub const HEART_HUE: (f32, f32) = (340.0, 360.0);

    /// Sparks per caught heart
    pub const PARTICLES_PER_CATCH: u32 = 5;
    /// Spark life budget; alpha = life / PARTICLE_LIFE
    pub const PARTICLE_LIFE: f32 = 100.0;
    /// Life lost per tick
    pub const PARTICLE_DECAY: f32 = 2.0;
    pub const PARTICLE_SIZE: (f32, f32) = (2.0, 7.0);
    /// Max absolute velocity per axis
    pub const PARTICLE_SPREAD: f32 = 2.0;
}
