//! Single-threaded queue of session events for the presentation layer.
//!
//! Controllers push events as transitions happen; the UI drains the queue
//! once per frame. Interior mutability via RefCell, shared via Rc.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use docchat_types::event::SessionEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: SessionEvent) {
        log::trace!("session event: {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.borrow().len()
    }
}
