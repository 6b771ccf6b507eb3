//! Event names emitted by components and repositories.
//!
//! Names are dot-separated. A handler registered for a prefix such as
//! [`CHANGED`] also receives every `changed.*` event.

/// Prefix shared by every component change notification.
pub const CHANGED: &str = "changed";

/// Emitted by a tag set after every add or remove call.
pub const CHANGED_TAGS: &str = "changed.tags";

/// Emitted by a status machine when the status or the status list changes.
pub const CHANGED_STATUS: &str = "changed.status";

/// Emitted when a title or description changes.
pub const CHANGED_CONTENT: &str = "changed.content";

/// Emitted when a creation, start, or due date changes.
pub const CHANGED_TIMELINE: &str = "changed.timeline";

/// Emitted when a related-id list changes.
pub const CHANGED_RELATIONS: &str = "changed.relations";

/// Emitted when a task counter is replaced.
pub const CHANGED_COUNTER: &str = "changed.counter";

/// Prefix of repository insert notifications (`inserted.<tag>`).
pub const INSERTED: &str = "inserted";

/// Prefix of repository removal notifications (`removed.<tag>`).
pub const REMOVED: &str = "removed";

/// Builds a repository lifecycle event name such as `inserted.task`.
#[must_use]
pub fn scoped(prefix: &str, tag: &str) -> String {
    format!("{prefix}.{tag}")
}
