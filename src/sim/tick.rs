//! One frame of the catch game
//!
//! Simulation and painting are interleaved per entity type: paddle, then
//! hearts, then sparks. That fixed order is also the paint order, so sparks
//! always land on top.

use super::collision::{has_fallen_out, is_caught, should_spawn};
use super::state::{GamePhase, GameState, Heart, Particle};
use crate::renderer::{Canvas, draw_heart, draw_particle, draw_player};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle left edge requested by the pointer (already centered)
    pub target_x: Option<f32>,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// False when the tick only cleared the surface
    pub simulated: bool,
    pub spawned: u32,
    pub caught: u32,
    /// Hearts that fell past the bottom edge
    pub missed: u32,
}

/// Clear the surface and, while playing, advance and paint every entity
pub fn tick(state: &mut GameState, input: &TickInput, canvas: &mut impl Canvas) -> TickOutcome {
    let surface = state.surface;
    canvas.clear_rect(0.0, 0.0, surface.width, surface.height);

    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }
    let Some(player) = state.player.as_mut() else {
        return outcome;
    };

    outcome.simulated = true;
    state.time_ticks += 1;

    player.update(input.target_x, surface);
    draw_player(canvas, player);
    let player = *player;

    let GameState {
        rng,
        tuning,
        hearts,
        particles,
        score,
        ..
    } = state;

    if should_spawn(rng, tuning.spawn_chance) {
        hearts.push(Heart::spawn(rng, surface, tuning));
        outcome.spawned += 1;
    }

    hearts.retain_mut(|heart| {
        heart.update();
        draw_heart(canvas, heart);

        if is_caught(heart, &player) {
            *score += 1;
            outcome.caught += 1;
            for _ in 0..tuning.particles_per_catch {
                particles.push(Particle::spawn(rng, heart.pos, tuning));
            }
            log::debug!("Caught heart at ({:.0}, {:.0}), score {}", heart.pos.x, heart.pos.y, score);
            return false;
        }

        if has_fallen_out(heart, surface) {
            outcome.missed += 1;
            return false;
        }
        true
    });

    let decay = tuning.particle_decay;
    particles.retain_mut(|particle| {
        particle.update(decay);
        draw_particle(canvas, particle);
        particle.is_alive()
    });

    outcome
}
