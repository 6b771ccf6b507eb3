//! Normalized, duplicate-free tag set.

use super::normalize;
use crate::events::{EventBus, EventPayload, names};
use std::cell::RefCell;

/// Set of normalized labels attached to an entity.
///
/// Tags keep insertion order. Every add or remove call emits one
/// `changed.tags` event carrying the full tag list after the call, even when
/// the call changed nothing.
#[derive(Debug, Default)]
pub struct TagSet {
    tags: RefCell<Vec<String>>,
    events: EventBus,
}

impl TagSet {
    /// Creates an empty tag set with its own bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tag set whose bus bubbles into `parent`.
    #[must_use]
    pub fn child_of(parent: &EventBus) -> Self {
        Self {
            tags: RefCell::default(),
            events: EventBus::child_of(parent),
        }
    }

    /// Creates a tag set holding the normalized `tags`.
    #[must_use]
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Self::new();
        set.insert_all(tags);
        set
    }

    /// Returns the bus this set emits on.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns a copy of the tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.borrow().len()
    }

    /// Returns `true` when the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.borrow().is_empty()
    }

    /// Adds one tag.
    pub fn add_tag(&self, tag: &str) -> &Self {
        self.add_tags([tag])
    }

    /// Adds several tags with a single notification.
    pub fn add_tags<I, S>(&self, tags: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_all(tags);
        self.notify();
        self
    }

    /// Removes one tag. Absent tags are ignored.
    pub fn remove_tag(&self, tag: &str) -> &Self {
        self.remove_tags([tag])
    }

    /// Removes several tags with a single notification.
    ///
    /// The notification lists the tags that remain.
    pub fn remove_tags<I, S>(&self, tags: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: Vec<String> = tags.into_iter().map(|t| normalize(t.as_ref())).collect();
        self.tags.borrow_mut().retain(|tag| !doomed.contains(tag));
        self.notify();
        self
    }

    /// Returns `true` when the normalized `tag` is present.
    ///
    /// An empty set contains nothing.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        let stored = self.tags.borrow();
        !stored.is_empty() && stored.contains(&normalize(tag))
    }

    /// Returns `true` when every one of `tags` is present.
    ///
    /// The empty-set rule is checked first: an empty set answers `false`
    /// even for an empty query, while a non-empty set answers `true` for an
    /// empty query.
    #[must_use]
    pub fn contains_all_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stored = self.tags.borrow();
        if stored.is_empty() {
            return false;
        }
        tags.into_iter()
            .all(|tag| stored.contains(&normalize(tag.as_ref())))
    }

    fn insert_all<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let incoming: Vec<String> = tags.into_iter().map(|t| normalize(t.as_ref())).collect();
        let mut stored = self.tags.borrow_mut();
        for tag in incoming {
            if !stored.contains(&tag) {
                stored.push(tag);
            }
        }
    }

    fn notify(&self) {
        let tags = self.tags();
        self.events
            .emit(names::CHANGED_TAGS, EventPayload::Tags { tags });
    }
}
