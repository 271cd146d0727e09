use crate::constants::{
    TRIM_ADJUST_SELECTOR, TRIM_ANGLE_OUT_ID, TRIM_CANCEL_ID, TRIM_WHEEL_SELECTOR, TRIM_ZERO_ID,
};
use crate::{dom, transport};
use pad_core::{TrimError, TrimRequest, TrimSession, TrimStep};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
struct TrimWiring {
    document: web::Document,
    url: Rc<str>,
    session: Rc<RefCell<TrimSession>>,
}

impl TrimWiring {
    fn wheel_radios(&self) -> Vec<web::Element> {
        dom::query_all(&self.document, TRIM_WHEEL_SELECTOR)
    }

    fn adjust_controls(&self) -> Vec<web::Element> {
        let mut controls = dom::query_all(&self.document, TRIM_ADJUST_SELECTOR);
        controls.extend(
            [TRIM_CANCEL_ID, TRIM_ZERO_ID]
                .iter()
                .filter_map(|id| self.document.get_element_by_id(id)),
        );
        controls
    }

    /// Wheel selection and adjustment are mutually exclusive on screen.
    fn set_adjusting(&self, adjusting: bool) {
        for radio in self.wheel_radios() {
            dom::set_disabled(&radio, adjusting);
        }
        for control in self.adjust_controls() {
            dom::set_disabled(&control, !adjusting);
        }
    }

    fn show_angle(&self) {
        let angle = self.session.borrow().angle();
        dom::set_text(&self.document, TRIM_ANGLE_OUT_ID, &angle.to_string());
    }

    fn post(&self, request: Result<TrimRequest, TrimError>) {
        let request = match request {
            Ok(r) => r,
            Err(e) => {
                log::warn!("[trim] {}", e);
                return;
            }
        };
        let url = self.url.clone();
        spawn_local(async move {
            match transport::post_form(&url, &request.form_body()).await {
                Ok(_) => log::info!("[trim] {:?} ok", request),
                Err(e) => log::warn!("[trim] {:?} failed: {}", request, e),
            }
        });
    }
}

fn element_id(ev: &web::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.id())
}

pub fn wire_trim_controls(document: &web::Document, url: String) {
    let w = TrimWiring {
        document: document.clone(),
        url: Rc::from(url),
        session: Rc::new(RefCell::new(TrimSession::default())),
    };

    for radio in w.wheel_radios() {
        let w = w.clone();
        dom::add_click_listener(&radio, move |ev| {
            if let Some(wheel) = element_id(&ev) {
                w.session.borrow_mut().select(&wheel);
                w.set_adjusting(true);
            }
        });
    }

    for button in dom::query_all(document, TRIM_ADJUST_SELECTOR) {
        let w = w.clone();
        dom::add_click_listener(&button, move |ev| {
            let Some(action) = element_id(&ev) else {
                return;
            };
            let request = TrimStep::parse(&action).and_then(|step| w.session.borrow_mut().adjust(step));
            w.post(request);
            w.show_angle();
        });
    }

    if let Some(cancel) = document.get_element_by_id(TRIM_CANCEL_ID) {
        let w = w.clone();
        dom::add_click_listener(&cancel, move |_| {
            let request = w.session.borrow_mut().cancel();
            w.post(request);
            w.show_angle();
            w.set_adjusting(false);
        });
    }

    if let Some(zero) = document.get_element_by_id(TRIM_ZERO_ID) {
        let w = w.clone();
        dom::add_click_listener(&zero, move |_| {
            let request = w.session.borrow_mut().commit_zero();
            w.post(request);
            w.show_angle();
            w.set_adjusting(false);
        });
    }
}
