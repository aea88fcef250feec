pub mod pointer;
pub mod touch;

use crate::scene::{Book, RayPicker};
use std::cell::RefCell;
use std::rc::Rc;
use story_core::InputEvent;

/// State every input closure shares. One listener set is installed for the
/// whole book; the dispatcher inside `Book` fans each event out to every
/// bound scene.
#[derive(Clone)]
pub struct InputWiring {
    pub book: Rc<RefCell<Book>>,
    pub picker: Rc<RayPicker>,
}

impl InputWiring {
    fn dispatch(&self, event: InputEvent) {
        let changed = self.book.borrow_mut().handle_input(&event, &*self.picker);
        if changed > 0 {
            log::trace!("[input] {:?} -> {} scenes", event, changed);
        }
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_mouse(&w);
    pointer::wire_tap(&w);
    touch::wire_touch(&w);
}
