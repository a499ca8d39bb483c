//! Scroll notification plumbing
//!
//! The container keeps only weak references to observer inboxes. Dropping the
//! [`ScrollObserver`] is what detaches it, so a view cannot leak a
//! registration on any exit path.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use thiserror::Error;

/// What moved the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCause {
    /// Direct offset change (mouse wheel, instant scroll)
    User,
    /// One frame of a smooth scroll
    Animation,
    /// Viewport width changed
    Resize,
    /// Content width changed
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
    pub cause: ScrollCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("scroll container is closed")]
    ContainerClosed,
}

type Inbox = RefCell<VecDeque<ScrollEvent>>;

/// Registration handle returned by `ScrollContainer::observe`
#[derive(Debug)]
pub struct ScrollObserver {
    inbox: Rc<Inbox>,
}

impl ScrollObserver {
    /// Take all pending events, oldest first
    pub fn drain(&self) -> Vec<ScrollEvent> {
        self.inbox.borrow_mut().drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.inbox.borrow().len()
    }
}

/// Container-side list of attached observers
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    inboxes: Vec<Weak<Inbox>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) -> ScrollObserver {
        self.prune();
        let inbox = Rc::new(RefCell::new(VecDeque::new()));
        self.inboxes.push(Rc::downgrade(&inbox));
        ScrollObserver { inbox }
    }

    /// Deliver `event` to every live observer, forgetting dropped ones
    pub fn notify(&mut self, event: ScrollEvent) {
        self.inboxes.retain(|weak| match weak.upgrade() {
            Some(inbox) => {
                inbox.borrow_mut().push_back(event);
                true
            }
            None => false,
        });
    }

    pub fn active_count(&self) -> usize {
        self.inboxes
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn detach_all(&mut self) {
        self.inboxes.clear();
    }

    fn prune(&mut self) {
        self.inboxes.retain(|weak| weak.strong_count() > 0);
    }
}
