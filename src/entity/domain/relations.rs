//! Ordered lists of related entity identifiers.

use super::EntityId;
use crate::events::{EventBus, EventPayload, names};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

/// Kind of relation an id list expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Projects a task is attached to.
    Projects,
    /// Milestones a task is attached to.
    Milestones,
    /// Entities a milestone requires.
    Requirements,
}

impl Relation {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Milestones => "milestones",
            Self::Requirements => "requirements",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Duplicate-free, ordered list of identifiers of related entities.
///
/// Identifiers are plain values: nothing checks that the referenced entity
/// exists. Link and unlink emit `changed.relations` only when the list
/// actually changes.
#[derive(Debug)]
pub struct RelatedIds {
    relation: Relation,
    ids: RefCell<Vec<EntityId>>,
    events: EventBus,
}

impl RelatedIds {
    /// Creates an empty list with its own bus.
    #[must_use]
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            ids: RefCell::default(),
            events: EventBus::new(),
        }
    }

    /// Creates a list holding `ids` whose bus bubbles into `parent`.
    #[must_use]
    pub fn child_of<I>(relation: Relation, ids: I, parent: &EventBus) -> Self
    where
        I: IntoIterator<Item = EntityId>,
    {
        let mut unique: Vec<EntityId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            relation,
            ids: RefCell::new(unique),
            events: EventBus::child_of(parent),
        }
    }

    /// Returns the bus this list emits on.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns a copy of the identifiers in link order.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        self.ids.borrow().clone()
    }

    /// Returns `true` when `id` is linked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.borrow().iter().any(|linked| linked.as_str() == id)
    }

    /// Appends `id` unless it is already linked.
    pub fn link(&self, id: impl Into<EntityId>) -> &Self {
        let id = id.into();
        let changed = {
            let mut ids = self.ids.borrow_mut();
            if ids.contains(&id) {
                false
            } else {
                ids.push(id);
                true
            }
        };
        if changed {
            self.notify();
        }
        self
    }

    /// Removes `id` when linked.
    pub fn unlink(&self, id: &str) -> &Self {
        let changed = {
            let mut ids = self.ids.borrow_mut();
            let before = ids.len();
            ids.retain(|linked| linked.as_str() != id);
            ids.len() != before
        };
        if changed {
            self.notify();
        }
        self
    }

    fn notify(&self) {
        self.events.emit(
            names::CHANGED_RELATIONS,
            EventPayload::Relations {
                relation: self.relation,
                ids: self.ids(),
            },
        );
    }
}
