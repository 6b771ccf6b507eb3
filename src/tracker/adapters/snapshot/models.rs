//! Serde records of the tracker snapshot format.
//!
//! Field names follow the established JSON layout (`date`, `duedate`,
//! `startdate`); dates are written as RFC 3339 strings and read as any
//! ISO 8601 timestamp, date-time, or date.

use super::dates;
use crate::entity::domain::{
    ContentHolder, Counter, EntityId, StatusHolder, StatusList, TagsHolder,
};
use crate::entity::ports::Entity;
use crate::tracker::domain::{
    Milestone, PersistedMilestoneData, PersistedProjectData, PersistedTaskData, Project, Task,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::warn;

/// Full tracker state keyed by entity identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryData {
    /// Task records.
    #[serde(default)]
    pub tasks: BTreeMap<EntityId, TaskRecord>,
    /// Project records.
    #[serde(default)]
    pub projects: BTreeMap<EntityId, ProjectRecord>,
    /// Milestone records.
    #[serde(default)]
    pub milestones: BTreeMap<EntityId, MilestoneRecord>,
}

impl RepositoryData {
    /// Returns `true` when the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.projects.is_empty() && self.milestones.is_empty()
    }
}

/// Persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp; restore falls back to the current time.
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    /// Due timestamp.
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub duedate: Option<DateTime<Utc>>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Current status; absent means the first legal status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Legal statuses; absent means the tracker defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
    /// Sub-item counter.
    #[serde(default)]
    pub counter: Option<Counter>,
    /// Attached project identifiers.
    #[serde(default)]
    pub projects: Vec<EntityId>,
    /// Attached milestone identifiers.
    #[serde(default)]
    pub milestones: Vec<EntityId>,
}

/// Persisted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Title.
    pub title: String,
    /// Due timestamp.
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub duedate: Option<DateTime<Utc>>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Legal statuses; absent means the tracker defaults.
    #[serde(default)]
    pub statuses: Option<Vec<String>>,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Current status; absent means the first legal status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Persisted milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    /// Title.
    pub title: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Start timestamp.
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub startdate: Option<DateTime<Utc>>,
    /// Due timestamp.
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub duedate: Option<DateTime<Utc>>,
    /// Required entity identifiers.
    #[serde(default)]
    pub requirements: Vec<EntityId>,
    /// Description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Current status; absent means the first legal status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Legal statuses; absent means the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
}

/// Validates persisted statuses, falling back to `defaults` when absent or
/// invalid.
fn restore_statuses(
    id: &EntityId,
    statuses: Option<Vec<String>>,
    defaults: &StatusList,
) -> StatusList {
    let Some(raw) = statuses else {
        return defaults.clone();
    };
    StatusList::new(&raw).unwrap_or_else(|err| {
        warn!(entity_id = %id, error = %err, "persisted statuses rejected, using defaults");
        defaults.clone()
    })
}

impl TaskRecord {
    /// Captures the current state of `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title(),
            description: task.description(),
            date: Some(task.creation_date()),
            duedate: task.due_date(),
            tags: task.tags(),
            status: Some(task.status()),
            statuses: Some(task.available_statuses()),
            counter: task.counter(),
            projects: task.projects().ids(),
            milestones: task.milestones().ids(),
        }
    }

    /// Converts the record into reconstruction data for `id`.
    #[must_use]
    pub fn into_persisted(
        self,
        id: EntityId,
        now: DateTime<Utc>,
        default_statuses: &StatusList,
    ) -> PersistedTaskData {
        let available_statuses = restore_statuses(&id, self.statuses, default_statuses);
        let status = self
            .status
            .unwrap_or_else(|| available_statuses.first().to_owned());
        PersistedTaskData {
            title: self.title,
            description: self.description,
            creation_date: self.date.unwrap_or(now),
            due_date: self.duedate,
            tags: self.tags,
            status,
            available_statuses,
            counter: self.counter,
            projects: self.projects,
            milestones: self.milestones,
            id,
        }
    }
}

impl ProjectRecord {
    /// Captures the current state of `project`.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title(),
            duedate: project.due_date(),
            tags: project.tags(),
            statuses: Some(project.available_statuses()),
            description: project.description(),
            status: Some(project.status()),
        }
    }

    /// Converts the record into reconstruction data for `id`.
    #[must_use]
    pub fn into_persisted(
        self,
        id: EntityId,
        default_statuses: &StatusList,
    ) -> PersistedProjectData {
        let available_statuses = restore_statuses(&id, self.statuses, default_statuses);
        let status = self
            .status
            .unwrap_or_else(|| available_statuses.first().to_owned());
        PersistedProjectData {
            title: self.title,
            description: self.description,
            due_date: self.duedate,
            tags: self.tags,
            status,
            available_statuses,
            id,
        }
    }
}

impl MilestoneRecord {
    /// Captures the current state of `milestone`.
    #[must_use]
    pub fn from_milestone(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title(),
            tags: milestone.tags(),
            startdate: milestone.start_date(),
            duedate: milestone.due_date(),
            requirements: milestone.requirements().ids(),
            description: milestone.description(),
            status: Some(milestone.status()),
            statuses: Some(milestone.available_statuses()),
        }
    }

    /// Converts the record into reconstruction data for `id`.
    #[must_use]
    pub fn into_persisted(self, id: EntityId) -> PersistedMilestoneData {
        let available_statuses = restore_statuses(&id, self.statuses, &StatusList::default());
        let status = self
            .status
            .unwrap_or_else(|| available_statuses.first().to_owned());
        PersistedMilestoneData {
            title: self.title,
            description: self.description,
            start_date: self.startdate,
            due_date: self.duedate,
            tags: self.tags,
            status,
            available_statuses,
            requirements: self.requirements,
            id,
        }
    }
}

/// Captures every entity of the three collections.
pub(crate) fn capture(
    tasks: &[Rc<Task>],
    projects: &[Rc<Project>],
    milestones: &[Rc<Milestone>],
) -> RepositoryData {
    RepositoryData {
        tasks: tasks
            .iter()
            .map(|task| (task.id().clone(), TaskRecord::from_task(task)))
            .collect(),
        projects: projects
            .iter()
            .map(|project| (project.id().clone(), ProjectRecord::from_project(project)))
            .collect(),
        milestones: milestones
            .iter()
            .map(|milestone| {
                (
                    milestone.id().clone(),
                    MilestoneRecord::from_milestone(milestone),
                )
            })
            .collect(),
    }
}
