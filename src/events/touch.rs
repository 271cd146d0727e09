use crate::input;
use crate::pad::{self, PadApp, SharedPad};
use pad_core::{Effects, TouchPoint};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TouchHandler = fn(&mut PadApp, &[TouchPoint]) -> Effects;

pub fn wire_touch_handlers(app: &SharedPad) {
    wire_touch(app, "touchstart", |a, t| a.pad.touch_start(t));
    wire_touch(app, "touchmove", |a, t| a.pad.touch_move(t));
    wire_touch(app, "touchend", |a, t| a.pad.touch_end(t));
    wire_touch(app, "touchcancel", |a, t| a.pad.touch_end(t));
}

// Every touch on the pad is consumed, otherwise dragging the knob would
// scroll the page.
fn wire_touch(app: &SharedPad, event: &str, handler: TouchHandler) {
    let app = app.clone();
    let canvas = app.borrow().canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let effects = {
            let mut a = app.borrow_mut();
            let touches = input::changed_touches(&ev, &a.canvas);
            handler(&mut *a, &touches)
        };
        pad::apply(&app, effects);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
