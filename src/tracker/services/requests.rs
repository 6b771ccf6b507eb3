//! Request payloads for creating tracked entities.

use crate::entity::domain::{Counter, EntityId};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) due_date: Option<DateTime<Utc>>,
    pub(super) tags: Vec<String>,
    pub(super) statuses: Option<Vec<String>>,
    pub(super) status: Option<String>,
    pub(super) counter: Option<Counter>,
    pub(super) projects: Vec<EntityId>,
    pub(super) milestones: Vec<EntityId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            tags: Vec::new(),
            statuses: None,
            status: None,
            counter: None,
            projects: Vec::new(),
            milestones: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the configured task statuses.
    #[must_use]
    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the initial status, which must be one of the task's statuses.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the sub-item counter.
    #[must_use]
    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Attaches the task to projects.
    #[must_use]
    pub fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches the task to milestones.
    #[must_use]
    pub fn with_milestones<I, S>(mut self, milestones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.milestones = milestones.into_iter().map(Into::into).collect();
        self
    }
}

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) due_date: Option<DateTime<Utc>>,
    pub(super) tags: Vec<String>,
    pub(super) statuses: Option<Vec<String>>,
}

impl CreateProjectRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            tags: Vec::new(),
            statuses: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the configured project statuses.
    #[must_use]
    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = Some(statuses.into_iter().map(Into::into).collect());
        self
    }
}

/// Request payload for creating a milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMilestoneRequest {
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) start_date: Option<DateTime<Utc>>,
    pub(super) due_date: Option<DateTime<Utc>>,
    pub(super) tags: Vec<String>,
    pub(super) requirements: Vec<EntityId>,
}

impl CreateMilestoneRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            start_date: None,
            due_date: None,
            tags: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the start timestamp.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Lists the identifiers the milestone requires.
    #[must_use]
    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }
}
