use story_core::START_BUTTON_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn start_button(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(START_BUTTON_ID)
}

#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = start_button(document) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Scenes are bound; the button may now open the camera.
pub fn enable_start(document: &web::Document) {
    if let Some(btn) = start_button(document)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(false);
    }
}
