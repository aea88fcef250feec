use crate::bindings::MindARThree;
use crate::dom;
use crate::frame::{self, FrameContext};
use crate::overlay;
use crate::scene::Book;
use std::cell::RefCell;
use std::rc::Rc;
use story_core::{CAMERA_DENIED_MESSAGE, START_BUTTON_ID};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The camera permission prompt needs a user activation, so tracking only
/// starts from the start button's click.
pub fn wire_start_button(
    document: &web::Document,
    mindar: MindARThree,
    book: Rc<RefCell<Book>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<()> {
    let button = document
        .get_element_by_id(START_BUTTON_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", START_BUTTON_ID))?;
    let doc = document.clone();
    let mindar = Rc::new(mindar);
    dom::add_click_listener(&button, move |_ev| {
        overlay::hide_start(&doc);
        if let Err(e) = book.borrow_mut().session.begin_start() {
            log::warn!("[session] {}", e);
            return;
        }
        log::info!("[session] starting camera");
        let start = mindar.start();
        let book = book.clone();
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            match JsFuture::from(start).await {
                Ok(_) => {
                    let running = book.borrow_mut().session.started();
                    match running {
                        Ok(()) => frame::start_loop(frame_ctx),
                        Err(e) => log::warn!("[session] {}", e),
                    }
                }
                Err(err) => {
                    _ = book.borrow_mut().session.failed(format!("{:?}", err));
                    if let Some(w) = web::window() {
                        _ = w.alert_with_message(CAMERA_DENIED_MESSAGE);
                    }
                }
            }
        });
    });
    overlay::enable_start(document);
    Ok(())
}
