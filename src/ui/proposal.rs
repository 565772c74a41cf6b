//! Proposal card: the runaway "No" button, the confetti "Yes" and the
//! hearts drifting up the background

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Captions the "No" button cycles through
pub const NO_CAPTIONS: [&str; 6] = [
    "No",
    "Are you sure?",
    "Pookie please",
    "Don't do this to me :(",
    "You're breaking my heart",
    "I'm gonna cry...",
];

/// Delay between "Yes" and the letter screen
pub const YES_NAVIGATE_DELAY_MS: i32 = 500;

/// A canvas-confetti burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Degrees
    pub spread: f32,
    /// Vertical origin as a fraction of the viewport
    pub origin_y: f32,
}

impl ConfettiBurst {
    /// Fired when "Yes" is pressed
    pub const YES: ConfettiBurst = ConfettiBurst {
        particle_count: 260,
        spread: 120.0,
        origin_y: 0.65,
    };
}

/// "Yes" only counts once; later clicks are ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct YesButton {
    pressed: bool,
}

impl YesButton {
    /// True on the first press only
    pub fn press(&mut self) -> bool {
        !std::mem::replace(&mut self.pressed, true)
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// The button that refuses to be clicked
#[derive(Debug, Clone, Default)]
pub struct NoButton {
    caption: usize,
}

impl NoButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption(&self) -> &'static str {
        NO_CAPTIONS[self.caption]
    }

    /// Jump somewhere else inside the card and advance the caption.
    /// Returns the new (left, top) offset in pixels.
    pub fn evade(&mut self, rng: &mut Pcg32, card: (f32, f32), button: (f32, f32)) -> (f32, f32) {
        let max_x = (card.0 - button.0).max(0.0);
        let max_y = (card.1 - button.1).max(0.0);
        let left = rng.random::<f32>() * max_x;
        let top = rng.random::<f32>() * max_y;
        self.caption = (self.caption + 1) % NO_CAPTIONS.len();
        (left, top)
    }
}

/// Emit interval for background hearts
pub const FLOATING_HEART_INTERVAL_MS: i32 = 380;
/// Background hearts are removed this long after creation
pub const FLOATING_HEART_LIFETIME_MS: f64 = 8000.0;

/// One decorative heart drifting up the proposal page
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub id: u32,
    pub glyph: &'static str,
    /// Horizontal position in viewport-width units
    pub left_vw: f32,
    pub font_px: f32,
    /// CSS animation duration in seconds
    pub duration_s: f32,
    pub opacity: f32,
}

/// Emitter that tracks live background hearts by birth time
#[derive(Debug)]
pub struct FloatingHearts {
    rng: Pcg32,
    next_id: u32,
    /// (id, born_ms), oldest first
    live: VecDeque<(u32, f64)>,
}

impl FloatingHearts {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_id: 0,
            live: VecDeque::new(),
        }
    }

    pub fn emit(&mut self, now_ms: f64) -> FloatingHeart {
        self.next_id += 1;
        let rng = &mut self.rng;
        let glyph = if rng.random::<f32>() > 0.5 { "❤️" } else { "💗" };
        let heart = FloatingHeart {
            id: self.next_id,
            glyph,
            left_vw: rng.random::<f32>() * 100.0,
            font_px: rng.random::<f32>() * 22.0 + 14.0,
            duration_s: rng.random::<f32>() * 3.0 + 4.0,
            opacity: rng.random::<f32>() * 0.5 + 0.4,
        };
        self.live.push_back((heart.id, now_ms));
        heart
    }

    /// Ids of hearts whose lifetime ran out; they are forgotten
    pub fn expire(&mut self, now_ms: f64) -> Vec<u32> {
        let mut expired = Vec::new();
        while let Some(&(id, born)) = self.live.front() {
            if now_ms - born < FLOATING_HEART_LIFETIME_MS {
                break;
            }
            self.live.pop_front();
            expired.push(id);
        }
        expired
    }

    /// Forget every live heart, returning their ids
    pub fn drain(&mut self) -> Vec<u32> {
        self.live.drain(..).map(|(id, _)| id).collect()
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_latches_after_first_press() {
        let mut yes = YesButton::default();
        assert!(!yes.is_pressed());
        assert!(yes.press());
        assert!(!yes.press());
        assert!(!yes.press());
        assert!(yes.is_pressed());
    }

    #[test]
    fn test_no_button_cycles_captions() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut button = NoButton::new();
        assert_eq!(button.caption(), "No");
        let captions: Vec<_> = (0..7)
            .map(|_| {
                button.evade(&mut rng, (300.0, 200.0), (80.0, 40.0));
                button.caption()
            })
            .collect();
        assert_eq!(captions[0], "Are you sure?");
        assert_eq!(captions[4], "I'm gonna cry...");
        assert_eq!(captions[5], "No");
        assert_eq!(captions[6], "Are you sure?");
    }

    #[test]
    fn test_no_button_stays_inside_card() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut button = NoButton::new();
        for _ in 0..200 {
            let (left, top) = button.evade(&mut rng, (300.0, 200.0), (80.0, 40.0));
            assert!((0.0..=220.0).contains(&left));
            assert!((0.0..=160.0).contains(&top));
        }
        // Button wider than card pins to the corner
        assert_eq!(button.evade(&mut rng, (50.0, 20.0), (80.0, 40.0)), (0.0, 0.0));
    }

    #[test]
    fn test_floating_heart_ranges() {
        let mut hearts = FloatingHearts::new(3);
        for i in 0..300 {
            let heart = hearts.emit(i as f64);
            assert!(heart.glyph == "❤️" || heart.glyph == "💗");
            assert!((0.0..=100.0).contains(&heart.left_vw));
            assert!((14.0..=36.0).contains(&heart.font_px));
            assert!((4.0..=7.0).contains(&heart.duration_s));
            assert!((0.4..=0.9).contains(&heart.opacity));
        }
    }

    #[test]
    fn test_floating_hearts_expire_after_lifetime() {
        let mut hearts = FloatingHearts::new(4);
        let first = hearts.emit(0.0).id;
        let second = hearts.emit(380.0).id;
        assert!(hearts.expire(7999.0).is_empty());
        assert_eq!(hearts.expire(8000.0), vec![first]);
        assert_eq!(hearts.expire(9000.0), vec![second]);
        assert_eq!(hearts.live(), 0);
    }
}
