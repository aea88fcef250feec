use super::InputWiring;
use crate::dom;
use glam::Vec2;
use story_core::{GestureInput, InputEvent, Touches};
use web_sys as web;

fn touches(ev: &web::TouchEvent) -> Touches {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

pub fn wire_touch(w: &InputWiring) {
    let ws = w.clone();
    dom::add_window_listener("touchstart", move |ev: web::TouchEvent| {
        ws.dispatch(InputEvent::Gesture(GestureInput::TouchStart(touches(&ev))));
    });
    let wm = w.clone();
    dom::add_window_listener("touchmove", move |ev: web::TouchEvent| {
        wm.dispatch(InputEvent::Gesture(GestureInput::TouchMove(touches(&ev))));
    });
    let we = w.clone();
    dom::add_window_listener("touchend", move |_ev: web::TouchEvent| {
        we.dispatch(InputEvent::Gesture(GestureInput::TouchEnd));
    });
}
