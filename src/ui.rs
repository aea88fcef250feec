//! Page decorations around the AR view: synopsis tabs, scroll reveal,
//! fireflies and smooth-scrolling nav links.

use crate::dom;
use story_core::constants::{
    NAV_LINK_SELECTOR, PARTICLES_ID, REVEAL_SELECTOR, TAB_BUTTON_SELECTOR,
};
use story_core::page::{self, Firefly};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show one synopsis language, hide the others and move the `active` class
/// to `button`. Called from the tab buttons' `onclick`.
#[wasm_bindgen]
pub fn switch_synopsis_lang(lang: &str, button: Option<web::Element>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for l in page::SYNOPSIS_LANGS {
        if let Some(el) = html_element(&document, &page::synopsis_id(l)) {
            _ = el.style().set_property("display", "none");
        }
    }
    if let Some(el) = html_element(&document, &page::synopsis_id(lang)) {
        _ = el.style().set_property("display", "block");
    }
    for b in dom::query_all(&document, TAB_BUTTON_SELECTOR) {
        _ = b.class_list().remove_1("active");
    }
    if let Some(b) = button {
        _ = b.class_list().add_1("active");
    }
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn reveal_visible(document: &web::Document) {
    let Some(height) = web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return;
    };
    for el in dom::query_all(document, REVEAL_SELECTOR) {
        if page::should_reveal(el.get_bounding_client_rect().top(), height) {
            _ = el.class_list().add_1("active");
        }
    }
}

pub fn wire_scroll_reveal(document: &web::Document) {
    let doc = document.clone();
    dom::add_window_listener("scroll", move |_ev: web::Event| reveal_visible(&doc));
    reveal_visible(document);
}

pub fn spawn_fireflies(document: &web::Document) {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for fly in page::fireflies(&mut rng) {
        if let Err(e) = append_firefly(document, &container, &fly) {
            log::warn!("[ui] firefly: {:?}", e);
            return;
        }
    }
}

fn append_firefly(
    document: &web::Document,
    container: &web::Element,
    fly: &Firefly,
) -> Result<(), JsValue> {
    let el: web::HtmlElement = document.create_element("div")?.dyn_into()?;
    el.class_list().add_1("firefly")?;
    let style = el.style();
    for (prop, value) in fly.style_props() {
        style.set_property(prop, &value)?;
    }
    container.append_child(&el)?;
    Ok(())
}

pub fn wire_smooth_scroll(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let href_el = link.clone();
        dom::add_click_listener(&link, move |ev| {
            ev.prevent_default();
            let Some(id) = href_el.get_attribute("href") else {
                return;
            };
            let Ok(Some(target)) = doc.query_selector(&id) else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let offset = window.page_y_offset().unwrap_or(0.0);
            let opts = web::ScrollToOptions::new();
            opts.set_top(page::nav_scroll_target(
                target.get_bounding_client_rect().top(),
                offset,
            ));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

pub fn init_page(document: &web::Document) {
    wire_scroll_reveal(document);
    spawn_fireflies(document);
    wire_smooth_scroll(document);
}
