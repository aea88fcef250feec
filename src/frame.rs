use crate::bindings::{Camera, Scene, WebGLRenderer};
use crate::scene::Book;
use std::cell::RefCell;
use std::rc::Rc;
use story_core::FrameClock;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub book: Rc<RefCell<Book>>,
    pub renderer: WebGLRenderer,
    pub scene: Scene,
    pub camera: Camera,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn new(
        book: Rc<RefCell<Book>>,
        renderer: WebGLRenderer,
        scene: Scene,
        camera: Camera,
    ) -> Self {
        Self {
            book,
            renderer,
            scene,
            camera,
            clock: FrameClock::default(),
        }
    }

    /// Advance every mixer, visible or not, then draw.
    pub fn frame(&mut self) {
        let dt_sec = self.clock.delta();
        self.book.borrow_mut().frame(dt_sec);
        self.renderer.render(&self.scene, &self.camera);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Runs for the rest of the page's life; there is no stop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    // Restart the delta from here, not from when the context was built.
    frame_ctx.borrow_mut().clock = FrameClock::default();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[frame] loop started");
}
