#![cfg(target_arch = "wasm32")]
use crate::constants::{COMMAND_STATUS_ID, PAD_CANVAS_ID};
use crate::pad::{PadApp, SharedPad};
use pad_core::{Pad, PadConfig, STATUS_URL_FIELD, TRIM_URL_FIELD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod pad;
mod render;
mod telemetry;
mod transport;
mod trim;

fn read_pad_config(document: &web::Document) -> Result<PadConfig, pad_core::ConfigError> {
    PadConfig::from_lookup(|id| dom::input_value(document, id))
}

/// Build the drive pad on `#controlPad`. Configuration errors are shown to
/// the operator and no input listener is installed.
fn init_pad(document: &web::Document, canvas_el: web::Element) -> anyhow::Result<SharedPad> {
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let built = read_pad_config(document).and_then(|config| {
        let pad = Pad::new(&config, dom::viewport_square())?;
        Ok((config, pad))
    });
    let (config, pad) = match built {
        Ok(parts) => parts,
        Err(e) => {
            dom::set_text(document, COMMAND_STATUS_ID, &format!("Error {e}"));
            return Err(e.into());
        }
    };
    log::info!(
        "[pad] ui angle {}°, {:.0}px pad, commands to {}",
        config.limits.ui_angle_max(),
        pad.size(),
        config.command_url
    );

    let ctx = render::context_2d(&canvas)?;
    let app: SharedPad = Rc::new(RefCell::new(PadApp {
        pad,
        canvas,
        ctx,
        command_url: config.command_url,
        timer: None,
    }));

    events::resize::fit_canvas(&app);
    events::wire_mouse_handlers(&app);
    events::wire_touch_handlers(&app);
    events::wire_pad_resize(&app);
    frame::request_redraw(&app);
    Ok(app)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pad-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Each widget is optional: a page hosts the pad, the wheel view, the trim
// controls, or a mix of them.
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A broken pad must not keep the other widgets from starting.
    let drive = document
        .get_element_by_id(PAD_CANVAS_ID)
        .and_then(|canvas_el| match init_pad(&document, canvas_el) {
            Ok(app) => Some(app),
            Err(e) => {
                log::error!("[pad] init failed: {:#}", e);
                None
            }
        });

    if let Some(url) = dom::input_value(&document, STATUS_URL_FIELD).filter(|u| !u.is_empty()) {
        telemetry::start_polling(url, drive);
    }

    if let Some(url) = dom::input_value(&document, TRIM_URL_FIELD).filter(|u| !u.is_empty()) {
        trim::wire_trim_controls(&document, url);
    }

    Ok(())
}
