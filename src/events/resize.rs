use crate::dom;
use crate::pad::{self, SharedPad};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Size the pad canvas to the current viewport square.
pub fn fit_canvas(app: &SharedPad) {
    let a = app.borrow();
    let size = a.pad.size().round().max(1.0) as u32;
    a.canvas.set_width(size);
    a.canvas.set_height(size);
}

pub fn wire_pad_resize(app: &SharedPad) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        let resized = app.borrow_mut().pad.resize(dom::viewport_square());
        match resized {
            Ok(effects) => {
                fit_canvas(&app);
                pad::apply(&app, effects);
            }
            Err(e) => log::error!("[pad] resize rejected: {}", e),
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
