//! Title and free-text description of an entity.

use crate::events::{EventBus, EventPayload, names};
use std::cell::RefCell;

/// Content part holding a title and a markdown-capable description.
///
/// Every setter emits `changed.content` with the field that was set.
#[derive(Debug, Default)]
pub struct Content {
    title: RefCell<String>,
    description: RefCell<String>,
    events: EventBus,
}

impl Content {
    /// Creates empty content with its own bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty content whose bus bubbles into `parent`.
    #[must_use]
    pub fn child_of(parent: &EventBus) -> Self {
        Self {
            title: RefCell::default(),
            description: RefCell::default(),
            events: EventBus::child_of(parent),
        }
    }

    /// Returns the bus this part emits on.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> String {
        self.description.borrow().clone()
    }

    /// Replaces the title.
    pub fn set_title(&self, title: impl Into<String>) -> &Self {
        let title = title.into();
        self.title.replace(title.clone());
        self.events
            .emit(names::CHANGED_CONTENT, EventPayload::Title { title });
        self
    }

    /// Replaces the description.
    pub fn set_description(&self, description: impl Into<String>) -> &Self {
        let description = description.into();
        self.description.replace(description.clone());
        self.events.emit(
            names::CHANGED_CONTENT,
            EventPayload::Description { description },
        );
        self
    }
}
