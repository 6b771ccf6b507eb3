//! Project entity.

use crate::entity::{
    domain::{
        Content, ContentHolder, EntityCore, EntityId, StatusHolder, StatusList, StatusMachine,
        TagSet, TagsHolder,
    },
    ports::Entity,
};
use crate::events::{EventBus, EventPayload, names};
use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Statuses a project moves through unless configured otherwise.
pub const DEFAULT_PROJECT_STATUSES: [&str; 3] = ["pending", "in_progress", "completed"];

/// Returns [`DEFAULT_PROJECT_STATUSES`] as a status list.
#[must_use]
pub fn default_project_statuses() -> StatusList {
    StatusList::new(DEFAULT_PROJECT_STATUSES).unwrap_or_default()
}

/// A group of tasks with its own status and optional due date.
#[derive(Debug)]
pub struct Project {
    core: EntityCore,
    due_date: Cell<Option<DateTime<Utc>>>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: EntityId,
    /// Title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Due timestamp, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Tags, normalized on restore.
    pub tags: Vec<String>,
    /// Current status, kept even when `available_statuses` omits it.
    pub status: String,
    /// Legal statuses.
    pub available_statuses: StatusList,
}

impl Project {
    /// Creates a project starting at the first of `statuses`.
    #[must_use]
    pub fn new(title: impl Into<String>, statuses: StatusList) -> Self {
        let core = EntityCore::new(EntityId::new(), statuses);
        core.content().set_title(title);
        Self {
            core,
            due_date: Cell::new(None),
        }
    }

    /// Reconstructs a project from persisted data, keeping its identifier.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let core = EntityCore::restored(data.id, data.available_statuses, &data.status);
        core.content().set_title(data.title);
        core.content().set_description(data.description);
        core.tag_set().add_tags(&data.tags);
        Self {
            core,
            due_date: Cell::new(data.due_date),
        }
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
}

impl Entity for Project {
    fn id(&self) -> &EntityId {
        self.core.id()
    }

    fn events(&self) -> &EventBus {
        self.core.events()
    }
}

impl TagsHolder for Project {
    fn tag_set(&self) -> &TagSet {
        self.core.tag_set()
    }
}

impl StatusHolder for Project {
    fn status_machine(&self) -> &StatusMachine {
        self.core.status_machine()
    }
}

impl ContentHolder for Project {
    fn content(&self) -> &Content {
        self.core.content()
    }
}
