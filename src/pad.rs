use crate::constants::COMMAND_STATUS_ID;
use crate::{dom, frame, transport};
use pad_core::{Effect, Effects, Pad, WindowId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the drive pad callbacks share.
pub struct PadApp {
    pub pad: Pad,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub command_url: String,
    /// Throttle window and its `setTimeout` handle.
    pub timer: Option<(WindowId, i32)>,
}

pub type SharedPad = Rc<RefCell<PadApp>>;

/// Execute the effects of one pad transition. Callers must not hold a borrow
/// of `app`.
pub fn apply(app: &SharedPad, effects: Effects) {
    for effect in effects {
        match effect {
            Effect::Send(command) => transport::send_command(app.clone(), command),
            Effect::StartTimer { window, delay } => start_timer(app, window, delay),
            Effect::CancelTimer(window) => cancel_timer(app, window),
        }
    }
    frame::request_redraw(app);
}

fn start_timer(app: &SharedPad, window: WindowId, delay: Duration) {
    let Some(w) = web::window() else {
        return;
    };
    let app_fire = app.clone();
    let callback = Closure::once_into_js(move || {
        let effects = {
            let mut a = app_fire.borrow_mut();
            if matches!(a.timer, Some((id, _)) if id == window) {
                a.timer = None;
            }
            a.pad.timer_expired(window)
        };
        apply(&app_fire, effects);
    });
    match w.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.as_millis() as i32,
    ) {
        Ok(handle) => app.borrow_mut().timer = Some((window, handle)),
        Err(e) => log::error!("[pad] setTimeout failed: {:?}", e),
    }
}

fn cancel_timer(app: &SharedPad, window: WindowId) {
    let handle = {
        let mut a = app.borrow_mut();
        match a.timer {
            Some((id, handle)) if id == window => {
                a.timer = None;
                Some(handle)
            }
            _ => None,
        }
    };
    if let (Some(handle), Some(w)) = (handle, web::window()) {
        w.clear_timeout_with_handle(handle);
    }
}

pub fn show_status(app: &SharedPad) {
    let text = app.borrow().pad.status().to_string();
    if let Some(doc) = dom::window_document() {
        dom::set_text(&doc, COMMAND_STATUS_ID, &text);
    }
}
