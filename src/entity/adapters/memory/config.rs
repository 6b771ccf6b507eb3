//! Configuration for in-memory repositories.

/// Event tag used when none is configured.
pub const DEFAULT_EVENT_TAG: &str = "entity";

/// Settings of an [`InMemoryEntityRepository`](super::InMemoryEntityRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    event_tag: String,
    forward_entity_events: bool,
}

impl RepositoryConfig {
    /// Creates a configuration with the given event tag.
    #[must_use]
    pub fn new(event_tag: impl Into<String>) -> Self {
        Self {
            event_tag: event_tag.into(),
            forward_entity_events: false,
        }
    }

    /// Makes the repository bubble every stored entity's bus into its own,
    /// so entity change events surface on the repository bus.
    #[must_use]
    pub const fn with_entity_forwarding(mut self, enabled: bool) -> Self {
        self.forward_entity_events = enabled;
        self
    }

    /// Returns the suffix of lifecycle event names.
    #[must_use]
    pub fn event_tag(&self) -> &str {
        &self.event_tag
    }

    /// Returns `true` when entity events are forwarded.
    #[must_use]
    pub const fn forwards_entity_events(&self) -> bool {
        self.forward_entity_events
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_TAG)
    }
}
