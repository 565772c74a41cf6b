//! Browser platform layer (wasm32 only)
//!
//! Handles the browser side of:
//! - The 2D canvas context as a [`crate::renderer::Canvas`]
//! - requestAnimationFrame as a [`crate::session::FrameScheduler`]
//! - Pointer/touch events
//! - Listener and timer lifetimes (removed on drop)

pub mod canvas2d;
pub mod dom;
pub mod input;
pub mod raf;

pub use dom::{EventListener, Interval, defer, set_visible};
pub use input::input_from_event;
pub use raf::RafScheduler;

use web_sys::Window;

use crate::sim::Surface;

/// Current viewport size in CSS pixels
pub fn viewport_surface(window: &Window) -> Surface {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Surface::new(width as f32, height as f32)
}
