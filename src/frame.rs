use crate::pad::SharedPad;
use crate::render;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Request one animation frame for the pad if it is dirty and none is
/// pending yet. Any number of transitions within a frame draw once.
pub fn request_redraw(app: &SharedPad) {
    let schedule = app.borrow_mut().pad.redraw_mut().should_schedule();
    if !schedule {
        return;
    }
    let app_frame = app.clone();
    let callback = Closure::once_into_js(move || {
        let mut a = app_frame.borrow_mut();
        if a.pad.redraw_mut().begin_frame() {
            if let Err(e) = render::draw_pad(&a.ctx, &a.pad) {
                log::error!("[frame] draw failed: {:?}", e);
            }
        }
    });
    let requested = match web::window() {
        Some(w) => w
            .request_animation_frame(callback.unchecked_ref())
            .map(|_| ())
            .map_err(|e| format!("{:?}", e)),
        None => Err("no window".to_string()),
    };
    if let Err(e) = requested {
        log::error!("[frame] requestAnimationFrame failed: {}", e);
        app.borrow_mut().pad.redraw_mut().unschedule();
    }
}
