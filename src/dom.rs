use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Value of a hidden `<input>` rendered by the host page.
pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>
    );
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_disabled(element: &web::Element, disabled: bool) {
    if disabled {
        _ = element.set_attribute("disabled", "disabled");
    } else {
        _ = element.remove_attribute("disabled");
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Largest square that fits the viewport, in CSS pixels.
pub fn viewport_square() -> f32 {
    let Some(window) = web::window() else {
        return 0.0;
    };
    let (client_w, client_h) = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| (el.client_width() as f64, el.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let w = client_w.max(inner(window.inner_width()));
    let h = client_h.max(inner(window.inner_height()));
    w.min(h) as f32
}
