//! In-memory keyed entity store.

use super::RepositoryConfig;
use crate::entity::{
    domain::EntityId,
    ports::{Entity, EntityStore},
};
use crate::events::{EntityHandle, EventBus, EventPayload, names};
use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use tracing::{debug, warn};

/// Single-threaded in-memory repository of one kind of entity.
///
/// Entities are shared as `Rc<T>`; the map is never borrowed while handlers
/// run, so handlers may query the repository that notified them.
pub struct InMemoryEntityRepository<T: Entity> {
    config: RepositoryConfig,
    entities: RefCell<HashMap<EntityId, Rc<T>>>,
    events: EventBus,
}

impl<T: Entity> InMemoryEntityRepository<T> {
    /// Creates an empty repository tagged `entity`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default())
    }

    /// Creates an empty repository with the given configuration.
    #[must_use]
    pub fn with_config(config: RepositoryConfig) -> Self {
        Self {
            config,
            entities: RefCell::default(),
            events: EventBus::new(),
        }
    }

    /// Creates an empty repository whose bus bubbles into `parent`.
    #[must_use]
    pub fn child_of(config: RepositoryConfig, parent: &EventBus) -> Self {
        Self {
            config,
            entities: RefCell::default(),
            events: EventBus::child_of(parent),
        }
    }

    /// Returns the repository configuration.
    #[must_use]
    pub const fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Returns the tag appended to lifecycle event names.
    #[must_use]
    pub fn event_tag(&self) -> &str {
        self.config.event_tag()
    }

    /// Returns the bus lifecycle events are emitted on.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns the identifiers of every stored entity.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.borrow().keys().cloned().collect()
    }

    fn announce(&self, prefix: &str, entity: Rc<T>) {
        let entity_id = entity.id().clone();
        self.events.emit(
            names::scoped(prefix, self.event_tag()),
            EventPayload::Entity {
                entity_id,
                entity: EntityHandle::new(entity),
            },
        );
    }

    fn start_forwarding(&self, entity: &T) {
        if !self.config.forwards_entity_events() {
            return;
        }
        if let Err(err) = entity.events().bubble_to(&self.events) {
            warn!(
                tag = %self.event_tag(),
                entity_id = %entity.id(),
                error = %err,
                "entity events not forwarded"
            );
        }
    }

    fn stop_forwarding(&self, entity: &T) {
        if self.config.forwards_entity_events() && entity.events().bubbles_to(&self.events) {
            entity.events().detach();
        }
    }
}

impl<T: Entity> Default for InMemoryEntityRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for InMemoryEntityRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryEntityRepository")
            .field("config", &self.config)
            .field("len", &self.entities.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<T: Entity> EntityStore<T> for InMemoryEntityRepository<T> {
    fn get<Q>(&self, id: &Q) -> Option<Rc<T>>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entities.borrow().get(id).cloned()
    }

    fn get_all(&self) -> Vec<Rc<T>> {
        self.entities.borrow().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entities.borrow().len()
    }

    fn insert(&self, entity: Rc<T>) -> Option<Rc<T>> {
        let previous = self
            .entities
            .borrow_mut()
            .insert(entity.id().clone(), Rc::clone(&entity));
        if let Some(old) = previous.as_ref().filter(|old| !Rc::ptr_eq(*old, &entity)) {
            self.stop_forwarding(old);
        }
        self.start_forwarding(&entity);
        debug!(
            tag = %self.event_tag(),
            entity_id = %entity.id(),
            replaced = previous.is_some(),
            "entity inserted"
        );
        self.announce(names::INSERTED, entity);
        previous
    }

    fn remove<Q>(&self, id: &Q) -> Option<Rc<T>>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entities.borrow_mut().remove(id)?;
        self.stop_forwarding(&removed);
        debug!(tag = %self.event_tag(), entity_id = %removed.id(), "entity removed");
        self.announce(names::REMOVED, Rc::clone(&removed));
        Some(removed)
    }

    fn clear(&self) -> usize {
        let drained: Vec<Rc<T>> = self
            .entities
            .borrow_mut()
            .drain()
            .map(|(_, entity)| entity)
            .collect();
        debug!(tag = %self.event_tag(), count = drained.len(), "repository cleared");
        let count = drained.len();
        for entity in drained {
            self.stop_forwarding(&entity);
            self.announce(names::REMOVED, entity);
        }
        count
    }
}
