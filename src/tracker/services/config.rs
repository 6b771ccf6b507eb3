//! Tracker configuration.

use crate::entity::domain::{InvalidInputError, StatusList};
use crate::tracker::domain::default_project_statuses;

/// Settings of a [`TrackerRepository`](super::TrackerRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    forward_entity_events: bool,
    default_task_statuses: StatusList,
    default_project_statuses: StatusList,
}

impl TrackerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every stored entity's change events surface on the tracker bus.
    #[must_use]
    pub const fn with_entity_forwarding(mut self, enabled: bool) -> Self {
        self.forward_entity_events = enabled;
        self
    }

    /// Sets the statuses of tasks created without explicit statuses.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when the list is empty or blank.
    pub fn with_task_statuses<I, S>(mut self, statuses: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.default_task_statuses = StatusList::new(statuses)?;
        Ok(self)
    }

    /// Sets the statuses of projects created without explicit statuses.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when the list is empty or blank.
    pub fn with_project_statuses<I, S>(mut self, statuses: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.default_project_statuses = StatusList::new(statuses)?;
        Ok(self)
    }

    /// Returns `true` when entity events are forwarded.
    #[must_use]
    pub const fn forwards_entity_events(&self) -> bool {
        self.forward_entity_events
    }

    /// Returns the default task statuses.
    #[must_use]
    pub const fn default_task_statuses(&self) -> &StatusList {
        &self.default_task_statuses
    }

    /// Returns the default project statuses.
    #[must_use]
    pub const fn default_project_statuses(&self) -> &StatusList {
        &self.default_project_statuses
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            forward_entity_events: false,
            default_task_statuses: StatusList::default(),
            default_project_statuses: default_project_statuses(),
        }
    }
}
