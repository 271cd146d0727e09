use crate::constants::FORM_CONTENT_TYPE;
use crate::pad::{self, SharedPad};
use pad_core::{ControlCommand, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", e))
}

/// POST `body` to `url` and return the response text.
pub async fn post(url: &str, body: &str, content_type: Option<&str>) -> Result<String, TransportError> {
    let window = web::window().ok_or_else(|| TransportError::Network("no window".into()))?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(body));
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    if let Some(ct) = content_type {
        request.headers().set("Content-Type", ct).map_err(js_err)?;
    }

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let text_promise = resp
        .text()
        .map_err(|e| TransportError::Body(format!("{:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| TransportError::Body(format!("{:?}", e)))?
        .as_string()
        .unwrap_or_default();

    if resp.ok() {
        Ok(text)
    } else {
        Err(TransportError::Status {
            status: resp.status(),
            body: text,
        })
    }
}

#[inline]
pub async fn post_form(url: &str, body: &str) -> Result<String, TransportError> {
    post(url, body, Some(FORM_CONTENT_TYPE)).await
}

/// Fire-and-forget drive command; the outcome only updates the pad status.
pub fn send_command(app: SharedPad, command: ControlCommand) {
    spawn_local(async move {
        let url = app.borrow().command_url.clone();
        match post_form(&url, &command.form_body()).await {
            Ok(_) => {
                app.borrow_mut().pad.transport_succeeded(command);
            }
            Err(e) => {
                let effects = app.borrow_mut().pad.transport_failed(&e);
                pad::apply(&app, effects);
            }
        }
        pad::show_status(&app);
    });
}
