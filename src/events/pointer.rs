use super::InputWiring;
use crate::dom;
use glam::Vec2;
use story_core::{GestureInput, InputEvent};
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_mouse(w: &InputWiring) {
    let wd = w.clone();
    dom::add_window_listener("mousedown", move |ev: web::MouseEvent| {
        wd.dispatch(InputEvent::Gesture(GestureInput::MouseDown(client_pos(&ev))));
    });
    let wm = w.clone();
    dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
        wm.dispatch(InputEvent::Gesture(GestureInput::MouseMove(client_pos(&ev))));
    });
    let wu = w.clone();
    dom::add_window_listener("mouseup", move |_ev: web::MouseEvent| {
        wu.dispatch(InputEvent::Gesture(GestureInput::MouseUp));
    });
}

/// Tap-to-pause. Pointer events cover mouse, pen and touch, so a touch tap
/// flips a scene once rather than once per event family.
pub fn wire_tap(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("pointerdown", move |ev: web::PointerEvent| {
        let Some((vw, vh)) = dom::viewport_size() else {
            return;
        };
        w.dispatch(InputEvent::Tap {
            client: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            viewport: Vec2::new(vw, vh),
        });
    });
}
