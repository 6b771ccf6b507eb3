//! Composition of the parts every entity owns.

use super::{
    Content, ContentHolder, EntityId, StatusHolder, StatusList, StatusMachine, TagSet, TagsHolder,
};
use crate::events::EventBus;

/// Identity, tags, status, and content of one entity, with every part's bus
/// bubbling into the entity bus.
///
/// Concrete entities embed a core and add their own fields, emitting any
/// extra notifications on [`Self::events`].
#[derive(Debug)]
pub struct EntityCore {
    id: EntityId,
    events: EventBus,
    content: Content,
    tags: TagSet,
    status: StatusMachine,
}

impl EntityCore {
    /// Creates a core with empty content and tags, starting at the first
    /// of `statuses`.
    #[must_use]
    pub fn new(id: EntityId, statuses: StatusList) -> Self {
        let events = EventBus::new();
        Self {
            content: Content::child_of(&events),
            tags: TagSet::child_of(&events),
            status: StatusMachine::child_of(statuses, &events),
            id,
            events,
        }
    }

    /// Reconstructs a core at a persisted status, which is kept even when
    /// `statuses` does not list it.
    #[must_use]
    pub fn restored(id: EntityId, statuses: StatusList, status: &str) -> Self {
        let events = EventBus::new();
        Self {
            content: Content::child_of(&events),
            tags: TagSet::child_of(&events),
            status: StatusMachine::restored(status, statuses, &events),
            id,
            events,
        }
    }

    /// Returns the entity identifier.
    #[must_use]
    pub const fn id(&self) -> &EntityId {
        &self.id
    }

    /// Returns the entity bus that every part bubbles into.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }
}

impl TagsHolder for EntityCore {
    fn tag_set(&self) -> &TagSet {
        &self.tags
    }
}

impl StatusHolder for EntityCore {
    fn status_machine(&self) -> &StatusMachine {
        &self.status
    }
}

impl ContentHolder for EntityCore {
    fn content(&self) -> &Content {
        &self.content
    }
}
