//! Spawn, catch and expiry policy
//!
//! The catch test is lopsided: horizontally the heart is a single
//! point (its x) tested against the half-open paddle span, vertically it is a
//! band whose bottom edge must reach the catch line. No box-box overlap.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Heart, Player, Surface};

/// One Bernoulli trial per tick
pub fn should_spawn(rng: &mut Pcg32, chance: f32) -> bool {
    rng.random::<f32>() < chance
}

/// Bottom edge at or past the catch line, x inside `[left, right)`
pub fn is_caught(heart: &Heart, player: &Player) -> bool {
    heart.bottom() >= player.pos.y && heart.pos.x >= player.pos.x && heart.pos.x < player.right()
}

/// Top edge below the surface
pub fn has_fallen_out(heart: &Heart, surface: Surface) -> bool {
    heart.pos.y > surface.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;

    fn heart_at(x: f32, y: f32, size: f32) -> Heart {
        Heart {
            pos: Vec2::new(x, y),
            size,
            speed: 3.0,
            hue: 350.0,
        }
    }

    fn paddle(x: f32, y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            width: 100.0,
            height: 80.0,
            dx: 0.0,
        }
    }

    #[test]
    fn test_catch_inside_span() {
        let player = paddle(150.0, 560.0);
        assert!(is_caught(&heart_at(200.0, 550.0, 30.0), &player));
    }

    #[test]
    fn test_catch_boundary_is_inclusive_vertically() {
        let player = paddle(150.0, 560.0);
        // bottom edge == catch line
        assert!(is_caught(&heart_at(200.0, 530.0, 30.0), &player));
        assert!(!is_caught(&heart_at(200.0, 529.5, 30.0), &player));
    }

    #[test]
    fn test_catch_span_is_half_open() {
        let player = paddle(150.0, 560.0);
        assert!(is_caught(&heart_at(150.0, 550.0, 30.0), &player));
        assert!(!is_caught(&heart_at(250.0, 550.0, 30.0), &player));
        assert!(!is_caught(&heart_at(149.9, 550.0, 30.0), &player));
    }

    #[test]
    fn test_heart_is_a_point_horizontally() {
        // Shape overlaps the paddle but the x point does not
        let player = paddle(150.0, 560.0);
        assert!(!is_caught(&heart_at(140.0, 550.0, 40.0), &player));
    }

    #[test]
    fn test_fallen_out_uses_top_edge() {
        let surface = Surface::new(400.0, 600.0);
        assert!(!has_fallen_out(&heart_at(10.0, 600.0, 30.0), surface));
        assert!(has_fallen_out(&heart_at(10.0, 600.5, 30.0), surface));
    }

    #[test]
    fn test_spawn_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(5);
        assert!((0..100).all(|_| !should_spawn(&mut rng, 0.0)));
        assert!((0..100).all(|_| should_spawn(&mut rng, 1.0)));
    }
}
