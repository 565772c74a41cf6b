//! requestAnimationFrame scheduling

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::session::FrameScheduler;

/// Shared slot for the frame callback. Filled after the session exists,
/// since the callback needs a handle back to it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Handle to the callback slot
    pub fn slot(&self) -> FrameCallback {
        self.callback.clone()
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            log::warn!("Frame requested before callback was installed");
            return None;
        };
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}
