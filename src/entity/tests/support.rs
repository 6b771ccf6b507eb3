//! Shared helpers for entity tests.

use crate::events::{Event, EventBus, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Events captured from one bus, in delivery order.
pub struct Captured {
    events: Rc<RefCell<Vec<Event>>>,
    _subscription: Subscription,
}

impl Captured {
    pub fn names(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|event| event.name().to_owned())
            .collect()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }
}

/// Records every event matching `pattern` on `bus`.
pub fn capture(bus: &EventBus, pattern: &str) -> Captured {
    let events: Rc<RefCell<Vec<Event>>> = Rc::default();
    let sink = Rc::clone(&events);
    let subscription = bus.handle(pattern, move |event| sink.borrow_mut().push(event.clone()));
    Captured {
        events,
        _subscription: subscription,
    }
}
