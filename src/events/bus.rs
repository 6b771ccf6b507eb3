//! Event bus with ordered handlers and single-parent bubbling.

use super::{Event, EventBusError, EventPayload};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Shared callback with a stable identity.
///
/// Closures cannot be compared, so the bus identifies handlers by the
/// allocation behind this value. Keep a clone of the handler passed to
/// [`EventBus::on`] to remove it later with [`EventBus::off`].
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    /// Wraps a closure.
    pub fn new(callback: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Returns `true` when both values wrap the same callback.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn call(&self, event: &Event) {
        (self.0)(event);
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

struct Registration {
    id: u64,
    pattern: String,
    handler: EventHandler,
}

#[derive(Default)]
struct BusState {
    registrations: Vec<Registration>,
    next_id: u64,
    parent: Option<EventBus>,
}

impl BusState {
    fn register(&mut self, pattern: &str, handler: EventHandler) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.registrations.push(Registration {
            id,
            pattern: pattern.to_owned(),
            handler,
        });
        id
    }

    fn is_registered(&self, id: u64) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }
}

/// Per-component publish/subscribe channel.
///
/// Cloning a bus yields another handle to the same channel. Handlers run
/// synchronously, in registration order, before [`Self::emit`] returns;
/// afterwards the event is forwarded unchanged to the parent bus, if any.
///
/// The handler list is captured when a dispatch starts. Handlers removed
/// while it runs, including the running handler itself, are skipped for the
/// rest of that dispatch. Handlers added while it runs first fire on the
/// next emission.
#[derive(Clone, Default)]
pub struct EventBus {
    state: Rc<RefCell<BusState>>,
}

impl EventBus {
    /// Creates a bus with no handlers and no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus that already bubbles into `parent`.
    ///
    /// A fresh bus cannot be an ancestor of `parent`, so no cycle check is
    /// needed.
    #[must_use]
    pub fn child_of(parent: &Self) -> Self {
        let bus = Self::new();
        bus.state.borrow_mut().parent = Some(parent.clone());
        bus
    }

    /// Registers `handler` for `event` and returns the bus for chaining.
    pub fn on(&self, event: &str, handler: &EventHandler) -> &Self {
        self.state.borrow_mut().register(event, handler.clone());
        self
    }

    /// Removes every registration of `handler` for `event`.
    ///
    /// Unknown pairs are ignored.
    pub fn off(&self, event: &str, handler: &EventHandler) -> &Self {
        self.state
            .borrow_mut()
            .registrations
            .retain(|r| !(r.pattern == event && r.handler.same_as(handler)));
        self
    }

    /// Registers a callback and returns a [`Subscription`] that removes it.
    pub fn handle(&self, event: &str, callback: impl Fn(&Event) + 'static) -> Subscription {
        let id = self
            .state
            .borrow_mut()
            .register(event, EventHandler::new(callback));
        Subscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Emits an event built from `name` and `payload`.
    pub fn emit(&self, name: impl Into<String>, payload: EventPayload) {
        self.dispatch(&Event::new(name, payload));
    }

    /// Delivers an already built event to local handlers, then bubbles it.
    pub fn dispatch(&self, event: &Event) {
        let matching: Vec<(u64, EventHandler)> = self
            .state
            .borrow()
            .registrations
            .iter()
            .filter(|r| event.matches(&r.pattern))
            .map(|r| (r.id, r.handler.clone()))
            .collect();
        trace!(event = event.name(), handlers = matching.len(), "dispatching event");

        for (id, handler) in matching {
            let still_registered = self.state.borrow().is_registered(id);
            if still_registered {
                handler.call(event);
            }
        }

        let parent = self.state.borrow().parent.clone();
        if let Some(parent) = parent {
            parent.dispatch(event);
        }
    }

    /// Forwards every event emitted on this bus to `parent` from now on.
    ///
    /// Replaces any previous parent.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::BubbleCycle`] when `parent` is this bus or
    /// already bubbles (directly or transitively) into this bus.
    pub fn bubble_to(&self, parent: &Self) -> Result<&Self, EventBusError> {
        if parent.reaches(self) {
            return Err(EventBusError::BubbleCycle);
        }
        self.state.borrow_mut().parent = Some(parent.clone());
        Ok(self)
    }

    /// Stops bubbling and returns the previous parent.
    pub fn detach(&self) -> Option<Self> {
        self.state.borrow_mut().parent.take()
    }

    /// Returns the current parent bus.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.state.borrow().parent.clone()
    }

    /// Returns `true` when this bus bubbles directly into `bus`.
    #[must_use]
    pub fn bubbles_to(&self, bus: &Self) -> bool {
        self.state
            .borrow()
            .parent
            .as_ref()
            .is_some_and(|parent| parent.ptr_eq(bus))
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.state.borrow().registrations.len()
    }

    /// Returns `true` when both values are handles to the same bus.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Returns `true` when `target` is this bus or one of its ancestors.
    fn reaches(&self, target: &Self) -> bool {
        let mut current = Some(self.clone());
        while let Some(bus) = current {
            if bus.ptr_eq(target) {
                return true;
            }
            current = bus.parent();
        }
        false
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("EventBus")
            .field("handlers", &state.registrations.len())
            .field("bubbles", &state.parent.is_some())
            .finish()
    }
}

/// Registration returned by [`EventBus::handle`].
///
/// Dropping it leaves the handler registered; call [`Self::cancel`] to
/// remove it.
#[must_use = "dropping a subscription keeps the handler registered"]
pub struct Subscription {
    state: Weak<RefCell<BusState>>,
    id: u64,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Removes the handler. Safe to call from inside any handler.
    pub fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().registrations.retain(|r| r.id != self.id);
        }
    }

    /// Returns `true` while the handler is registered on a live bus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.borrow().is_registered(self.id))
    }
}
