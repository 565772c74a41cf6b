//! Deterministic simulation module
//!
//! All catch-game logic lives here. This module must stay deterministic:
//! - One tick per animation frame, fixed per-tick speeds
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No platform dependencies; drawing goes through `renderer::Canvas`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{has_fallen_out, is_caught, should_spawn};
pub use state::{GamePhase, GameState, Heart, Particle, Player, Surface};
pub use tick::{TickInput, TickOutcome, tick};
