//! DOM events to [`InputEvent`]

use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::input::InputEvent;

/// Translate a `mousemove` or `touchmove` event; anything else is ignored
pub fn input_from_event(event: &Event) -> Option<InputEvent> {
    // Dispatch on the event type: `instanceof TouchEvent` throws on desktop
    // browsers that do not define it.
    match event.type_().as_str() {
        "touchmove" | "touchstart" => {
            let list = event.unchecked_ref::<TouchEvent>().touches();
            let contacts = (0..list.length())
                .filter_map(|i| list.get(i))
                .map(|t| t.client_x() as f32)
                .collect();
            Some(InputEvent::TouchMove { contacts })
        }
        "mousemove" | "pointermove" => Some(InputEvent::PointerMove {
            client_x: event.unchecked_ref::<MouseEvent>().client_x() as f32,
        }),
        _ => None,
    }
}
