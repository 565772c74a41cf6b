//! DOM listener and timer guards
//!
//! Each guard owns its closure and deregisters it on drop, so tearing down a
//! view is just dropping its guards.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, Window};

/// An `addEventListener` registration
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A `setInterval` registration
pub struct Interval {
    window: Window,
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(window: &Window, period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut()>::new(tick);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            window: window.clone(),
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// Run `f` once after `delay_ms`, outside the current callback
pub fn defer(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
}

/// Toggle the `hidden` class
pub fn set_visible(element: &Element, visible: bool) {
    let classes = element.class_list();
    let _ = if visible {
        classes.remove_1("hidden")
    } else {
        classes.add_1("hidden")
    };
}
