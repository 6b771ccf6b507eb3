//! Milestone entity.

use crate::entity::{
    domain::{
        Content, ContentHolder, EntityCore, EntityId, RelatedIds, Relation, StatusHolder,
        StatusList, StatusMachine, TagSet, TagsHolder,
    },
    ports::Entity,
};
use crate::events::{EventBus, EventPayload, names};
use chrono::{DateTime, Utc};
use std::cell::Cell;

/// A dated checkpoint listing the entities it requires.
#[derive(Debug)]
pub struct Milestone {
    core: EntityCore,
    start_date: Cell<Option<DateTime<Utc>>>,
    due_date: Cell<Option<DateTime<Utc>>>,
    requirements: RelatedIds,
}

/// Parameter object for reconstructing a persisted milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMilestoneData {
    /// Persisted identifier.
    pub id: EntityId,
    /// Title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Start timestamp, if any.
    pub start_date: Option<DateTime<Utc>>,
    /// Due timestamp, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Tags, normalized on restore.
    pub tags: Vec<String>,
    /// Current status.
    pub status: String,
    /// Legal statuses.
    pub available_statuses: StatusList,
    /// Identifiers of required entities.
    pub requirements: Vec<EntityId>,
}

impl Milestone {
    /// Creates an undated milestone with the default statuses.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let core = EntityCore::new(EntityId::new(), StatusList::default());
        core.content().set_title(title);
        Self::assemble(core, Vec::new())
    }

    /// Reconstructs a milestone from persisted data, keeping its identifier.
    #[must_use]
    pub fn from_persisted(data: PersistedMilestoneData) -> Self {
        let core = EntityCore::restored(data.id, data.available_statuses, &data.status);
        core.content().set_title(data.title);
        core.content().set_description(data.description);
        core.tag_set().add_tags(&data.tags);
        let milestone = Self::assemble(core, data.requirements);
        milestone.start_date.set(data.start_date);
        milestone.due_date.set(data.due_date);
        milestone
    }

    fn assemble(core: EntityCore, requirement_ids: Vec<EntityId>) -> Self {
        Self {
            requirements: RelatedIds::child_of(
                Relation::Requirements,
                requirement_ids,
                core.events(),
            ),
            core,
            start_date: Cell::new(None),
            due_date: Cell::new(None),
        }
    }

    /// Returns the start timestamp, if any.
    #[must_use]
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date.get()
    }

    /// Replaces or clears the start timestamp.
    pub fn set_start_date(&self, start_date: Option<DateTime<Utc>>) -> &Self {
        self.start_date.set(start_date);
        self.core.events().emit(
            names::CHANGED_TIMELINE,
            EventPayload::StartDate { start_date },
        );
        self
    }

    /// Returns the due timestamp, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date.get()
    }

    /// Replaces or clears the due timestamp.
    pub fn set_due_date(&self, due_date: Option<DateTime<Utc>>) -> &Self {
        self.due_date.set(due_date);
        self.core
            .events()
            .emit(names::CHANGED_TIMELINE, EventPayload::DueDate { due_date });
        self
    }

    /// Returns the requirement list.
    #[must_use]
    pub const fn requirements(&self) -> &RelatedIds {
        &self.requirements
    }
}

impl Entity for Milestone {
    fn id(&self) -> &EntityId {
        self.core.id()
    }

    fn events(&self) -> &EventBus {
        self.core.events()
    }
}

impl TagsHolder for Milestone {
    fn tag_set(&self) -> &TagSet {
        self.core.tag_set()
    }
}

impl StatusHolder for Milestone {
    fn status_machine(&self) -> &StatusMachine {
        self.core.status_machine()
    }
}

impl ContentHolder for Milestone {
    fn content(&self) -> &Content {
        self.core.content()
    }
}
