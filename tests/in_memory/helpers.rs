//! Shared test helpers for in-memory tracker integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use taskboard::events::{Event, EventBus, Subscription};
use taskboard::tracker::services::TrackerRepository;

/// Tracker type used throughout the integration tests.
pub type TestTracker = TrackerRepository<DefaultClock>;

/// Provides a fresh tracker for each test.
#[fixture]
pub fn tracker() -> TestTracker {
    TrackerRepository::new(Arc::new(DefaultClock))
}

/// Events recorded by a live subscription.
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    _subscription: Subscription,
}

impl Recorder {
    /// Subscribes to `pattern` on `bus` and records every delivery.
    #[must_use]
    pub fn attach(bus: &EventBus, pattern: &str) -> Self {
        let events: Rc<RefCell<Vec<Event>>> = Rc::default();
        let sink = Rc::clone(&events);
        let subscription = bus.handle(pattern, move |event| sink.borrow_mut().push(event.clone()));
        Self {
            events,
            _subscription: subscription,
        }
    }

    /// Names of the recorded events in delivery order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|event| event.name().to_owned())
            .collect()
    }

    /// Copies of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}
