//! Event values delivered to handlers.

use crate::entity::domain::{Counter, EntityId, Relation};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Type-erased shared handle to an entity carried by repository events.
///
/// Repositories are generic over the entity type while several of them may
/// bubble into one parent bus, so the payload stores the entity behind
/// [`Any`] and callers recover the concrete type with [`Self::downcast`].
#[derive(Clone)]
pub struct EntityHandle(Rc<dyn Any>);

impl EntityHandle {
    /// Wraps a shared entity.
    #[must_use]
    pub fn new<T: 'static>(entity: Rc<T>) -> Self {
        Self(entity)
    }

    /// Returns the entity when it is of type `T`.
    #[must_use]
    pub fn downcast<T: 'static>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.0).downcast::<T>().ok()
    }

    /// Returns `true` when the wrapped entity is of type `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        (*self.0).is::<T>()
    }
}

impl PartialEq for EntityHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntityHandle(..)")
    }
}

/// Data attached to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Full tag list after an add or remove call.
    Tags {
        /// Normalized tags in insertion order.
        tags: Vec<String>,
    },
    /// Newly committed status.
    Status {
        /// Normalized status value.
        status: String,
    },
    /// Replacement list of legal statuses.
    AvailableStatuses {
        /// Normalized, duplicate-free statuses in order.
        available_statuses: Vec<String>,
    },
    /// New title.
    Title {
        /// Title text.
        title: String,
    },
    /// New free-text description.
    Description {
        /// Description text, markdown allowed.
        description: String,
    },
    /// New creation date.
    CreationDate {
        /// Creation timestamp.
        creation_date: DateTime<Utc>,
    },
    /// New start date.
    StartDate {
        /// Start timestamp, if any.
        start_date: Option<DateTime<Utc>>,
    },
    /// New due date.
    DueDate {
        /// Due timestamp, if any.
        due_date: Option<DateTime<Utc>>,
    },
    /// Related identifiers after a link or unlink.
    Relations {
        /// Which relation changed.
        relation: Relation,
        /// Identifiers after the change.
        ids: Vec<EntityId>,
    },
    /// Replacement counter.
    Counter {
        /// Counter value, if any.
        counter: Option<Counter>,
    },
    /// Entity inserted into or removed from a repository.
    Entity {
        /// Identifier of the affected entity.
        entity_id: EntityId,
        /// The affected entity.
        entity: EntityHandle,
    },
}

/// A named notification with its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: String,
    payload: EventPayload,
}

impl Event {
    /// Creates an event.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Returns the full event name, for example `changed.tags`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// Returns the part of the name after the first dot, if any.
    ///
    /// For repository events this is the repository tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.name.split_once('.').map(|(_, tag)| tag)
    }

    /// Returns `true` when a handler registered for `pattern` receives this
    /// event.
    ///
    /// A pattern matches its exact name and every name nested under it, so
    /// `changed` matches `changed.tags` but not `changedtags`.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        self.name
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    }
}
