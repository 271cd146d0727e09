use crate::input;
use crate::pad::{self, SharedPad};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mouse_handlers(app: &SharedPad) {
    wire_mousedown(app);
    wire_mousemove(app);
    wire_mouseup(app);
}

// Tracking only starts on the knob itself; presses elsewhere on the pad are
// ignored by the tracker.
fn wire_mousedown(app: &SharedPad) {
    let app = app.clone();
    let canvas = app.borrow().canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let effects = {
            let mut a = app.borrow_mut();
            let p = input::mouse_pad_local(&ev, &a.canvas);
            a.pad.mouse_down(p)
        };
        pad::apply(&app, effects);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Moves and releases are watched on the window so a drag that leaves the pad
// keeps steering (clamped) and still ends.
fn wire_mousemove(app: &SharedPad) {
    let app = app.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !app.borrow().pad.knob().tracking() {
            return;
        }
        let effects = {
            let mut a = app.borrow_mut();
            let p = input::mouse_pad_local(&ev, &a.canvas);
            a.pad.mouse_move(p)
        };
        pad::apply(&app, effects);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseup(app: &SharedPad) {
    let app = app.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let effects = app.borrow_mut().pad.mouse_up();
        pad::apply(&app, effects);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
