//! Repository port for keyed entity storage.

use crate::entity::domain::EntityId;
use crate::events::EventBus;
use std::borrow::Borrow;
use std::hash::Hash;
use std::rc::Rc;

/// Anything a repository can store.
pub trait Entity: 'static {
    /// Returns the immutable identifier.
    fn id(&self) -> &EntityId;

    /// Returns the bus the entity announces its changes on.
    fn events(&self) -> &EventBus;
}

/// Keyed store of one kind of entity.
///
/// Absence is never an error: lookups return `None` and removing an unknown
/// identifier is a no-op. Mutations announce themselves on the store's bus
/// as `inserted.<tag>` and `removed.<tag>`.
pub trait EntityStore<T: Entity> {
    /// Returns the entity stored under `id`.
    fn get<Q>(&self, id: &Q) -> Option<Rc<T>>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns a snapshot of every stored entity in no particular order.
    ///
    /// Changing the returned vector never affects the store.
    fn get_all(&self) -> Vec<Rc<T>>;

    /// Returns `true` when an entity is stored under `id`.
    fn contains<Q>(&self, id: &Q) -> bool
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(id).is_some()
    }

    /// Returns the number of stored entities.
    fn len(&self) -> usize;

    /// Returns `true` when nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `entity` under its identifier, replacing and returning any
    /// entity already stored there. Always emits `inserted.<tag>`.
    fn insert(&self, entity: Rc<T>) -> Option<Rc<T>>;

    /// Removes and returns the entity stored under `id`, emitting
    /// `removed.<tag>`. Unknown identifiers emit nothing.
    fn remove<Q>(&self, id: &Q) -> Option<Rc<T>>
    where
        EntityId: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Removes the entity stored under `entity`'s identifier.
    fn remove_entity(&self, entity: &T) -> Option<Rc<T>> {
        self.remove(entity.id())
    }

    /// Removes every entity, emitting `removed.<tag>` for each, and returns
    /// how many were removed.
    fn clear(&self) -> usize;
}
