//! Pointer and touch input
//!
//! Both sources reduce to a horizontal client coordinate; the paddle is
//! centered under it with no smoothing.

/// A window-level move event
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove { client_x: f32 },
    /// Client x of every active contact, in touch-list order
    TouchMove { contacts: Vec<f32> },
}

impl InputEvent {
    /// Horizontal coordinate this event points at (first touch wins)
    pub fn client_x(&self) -> Option<f32> {
        match self {
            InputEvent::PointerMove { client_x } => Some(*client_x),
            InputEvent::TouchMove { contacts } => contacts.first().copied(),
        }
    }
}

/// Paddle left edge that centers a paddle of `width` under `client_x`
#[inline]
pub fn paddle_target(client_x: f32, width: f32) -> f32 {
    client_x - width / 2.0
}
