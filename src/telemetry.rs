use crate::constants::{TELEMETRY_STATUS_ID, WHEEL_CANVAS_PREFIX};
use crate::pad::{self, SharedPad};
use crate::{dom, render, transport};
use pad_core::{
    TelemetrySnapshot, TransportError, WheelGlyph, FIRST_POLL_DELAY, POLL_INTERVAL,
    STATUS_REQUEST_BODY,
};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Poll wheel status forever: the next request is only scheduled after a
/// successful response, so a slow rover slows the poll down with it.
///
/// A failed poll also releases `drive`, the page's pad, if there is one.
pub fn start_polling(status_url: String, drive: Option<SharedPad>) {
    log::info!("[telemetry] polling {}", status_url);
    schedule_poll(Rc::from(status_url), drive, FIRST_POLL_DELAY);
}

fn schedule_poll(url: Rc<str>, drive: Option<SharedPad>, delay: Duration) {
    let Some(w) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || spawn_local(poll(url, drive)));
    if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.as_millis() as i32,
    ) {
        log::error!("[telemetry] setTimeout failed: {:?}", e);
    }
}

async fn fetch_snapshot(url: &str) -> Result<TelemetrySnapshot, TransportError> {
    let body = transport::post_form(url, STATUS_REQUEST_BODY).await?;
    TelemetrySnapshot::parse(&body).map_err(|e| TransportError::Body(e.to_string()))
}

async fn poll(url: Rc<str>, drive: Option<SharedPad>) {
    match fetch_snapshot(&url).await {
        Ok(snapshot) => {
            draw_snapshot(&snapshot);
            schedule_poll(url, drive, POLL_INTERVAL);
        }
        Err(e) => {
            // Not retried; reloading the page restarts the poll.
            log::warn!("[telemetry] stopped: {}", e);
            if let Some(doc) = dom::window_document() {
                dom::set_text(&doc, TELEMETRY_STATUS_ID, &format!("Error {e}"));
            }
            if let Some(app) = drive {
                let effects = app.borrow_mut().pad.telemetry_failed(&e);
                pad::apply(&app, effects);
                pad::show_status(&app);
            }
        }
    }
}

fn draw_snapshot(snapshot: &TelemetrySnapshot) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    for (name, status) in snapshot.iter() {
        let id = format!("{WHEEL_CANVAS_PREFIX}{name}");
        let Some(canvas) = doc
            .get_element_by_id(&id)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::debug!("[telemetry] no canvas for wheel {}", name);
            continue;
        };
        let ctx = match render::context_2d(&canvas) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("[telemetry] {}: {:?}", name, e);
                continue;
            }
        };
        let (w, h) = (canvas.width() as f32, canvas.height() as f32);
        let glyph = WheelGlyph::layout(w, h, status);
        if let Err(e) = render::draw_wheel(&ctx, w as f64, h as f64, &glyph) {
            log::error!("[telemetry] draw {}: {:?}", name, e);
        }
    }
}
