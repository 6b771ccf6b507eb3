//! Task entity.

use crate::entity::{
    domain::{
        Content, ContentHolder, Counter, EntityCore, EntityId, RelatedIds, Relation,
        StatusHolder, StatusList, StatusMachine, TagSet, TagsHolder,
    },
    ports::Entity,
};
use crate::events::{EventBus, EventPayload, names};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::cell::{Cell, RefCell};

/// A unit of work: a title, a description, and a status that moves through
/// the task's configured statuses.
///
/// Tags, status, content, and relation changes bubble into [`Entity::events`]
/// together with the task's own `changed.timeline` and `changed.counter`
/// notifications.
#[derive(Debug)]
pub struct Task {
    core: EntityCore,
    creation_date: Cell<DateTime<Utc>>,
    due_date: Cell<Option<DateTime<Utc>>>,
    counter: RefCell<Option<Counter>>,
    projects: RelatedIds,
    milestones: RelatedIds,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: EntityId,
    /// Title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Due timestamp, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Tags, normalized on restore.
    pub tags: Vec<String>,
    /// Current status, kept even when `available_statuses` omits it.
    pub status: String,
    /// Legal statuses.
    pub available_statuses: StatusList,
    /// Sub-item counter, if any.
    pub counter: Option<Counter>,
    /// Identifiers of attached projects.
    pub projects: Vec<EntityId>,
    /// Identifiers of attached milestones.
    pub milestones: Vec<EntityId>,
}

impl Task {
    /// Creates a task with the default statuses.
    #[must_use]
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Self {
        Self::with_statuses(title, StatusList::default(), clock)
    }

    /// Creates a task starting at the first of `statuses`.
    #[must_use]
    pub fn with_statuses(
        title: impl Into<String>,
        statuses: StatusList,
        clock: &impl Clock,
    ) -> Self {
        let core = EntityCore::new(EntityId::new(), statuses);
        core.content().set_title(title);
        Self::assemble(core, clock.utc(), Vec::new(), Vec::new())
    }

    /// Reconstructs a task from persisted data, keeping its identifier.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let core = EntityCore::restored(data.id, data.available_statuses, &data.status);
        core.content().set_title(data.title);
        core.content().set_description(data.description);
        core.tag_set().add_tags(&data.tags);
        let task = Self::assemble(core, data.creation_date, data.projects, data.milestones);
        task.due_date.set(data.due_date);
        task.counter.replace(data.counter);
        task
    }

    fn assemble(
        core: EntityCore,
        creation_date: DateTime<Utc>,
        project_ids: Vec<EntityId>,
        milestone_ids: Vec<EntityId>,
    ) -> Self {
        Self {
            projects: RelatedIds::child_of(Relation::Projects, project_ids, core.events()),
            milestones: RelatedIds::child_of(Relation::Milestones, milestone_ids, core.events()),
            core,
            creation_date: Cell::new(creation_date),
            due_date: Cell::new(None),
            counter: RefCell::new(None),
        }
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date.get()
    }

    /// Replaces the creation timestamp.
    pub fn set_creation_date(&self, creation_date: DateTime<Utc>) -> &Self {
        self.creation_date.set(creation_date);
        self.core.events().emit(
            names::CHANGED_TIMELINE,
            EventPayload::CreationDate { creation_date },
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

    /// Returns a copy of the counter, if any.
    #[must_use]
    pub fn counter(&self) -> Option<Counter> {
        self.counter.borrow().clone()
    }

    /// Replaces or clears the counter.
    pub fn set_counter(&self, counter: Option<Counter>) -> &Self {
        self.counter.replace(counter.clone());
        self.core
            .events()
            .emit(names::CHANGED_COUNTER, EventPayload::Counter { counter });
        self
    }

    /// Returns the attached project list.
    #[must_use]
    pub const fn projects(&self) -> &RelatedIds {
        &self.projects
    }

    /// Returns the attached milestone list.
    #[must_use]
    pub const fn milestones(&self) -> &RelatedIds {
        &self.milestones
    }
}

impl Entity for Task {
    fn id(&self) -> &EntityId {
        self.core.id()
    }

    fn events(&self) -> &EventBus {
        self.core.events()
    }
}

impl TagsHolder for Task {
    fn tag_set(&self) -> &TagSet {
        self.core.tag_set()
    }
}

impl StatusHolder for Task {
    fn status_machine(&self) -> &StatusMachine {
        self.core.status_machine()
    }
}

impl ContentHolder for Task {
    fn content(&self) -> &Content {
        self.core.content()
    }
}
