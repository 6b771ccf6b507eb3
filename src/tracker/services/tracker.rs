//! Aggregate repository over tasks, projects, and milestones.

use super::{CreateMilestoneRequest, CreateProjectRequest, CreateTaskRequest, TrackerConfig};
use crate::entity::{
    adapters::memory::{InMemoryEntityRepository, RepositoryConfig},
    domain::{ContentHolder, EntityId, InvalidInputError, StatusHolder, StatusList, TagsHolder},
    ports::EntityStore,
};
use crate::events::EventBus;
use crate::tracker::{
    adapters::snapshot::{self, RepositoryData, SnapshotError},
    domain::{Milestone, Project, Task},
};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Event tag of the task collection.
pub const TASK_TAG: &str = "task";
/// Event tag of the project collection.
pub const PROJECT_TAG: &str = "project";
/// Event tag of the milestone collection.
pub const MILESTONE_TAG: &str = "milestone";

/// Service-level errors for tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Input validation failed.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// A snapshot could not be encoded or decoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Holds the task, project, and milestone collections behind one bus.
///
/// Each collection emits `inserted.<tag>` and `removed.<tag>` with the tags
/// [`TASK_TAG`], [`PROJECT_TAG`], and [`MILESTONE_TAG`]; all of them bubble
/// into [`Self::events`].
pub struct TrackerRepository<C: Clock = DefaultClock> {
    config: TrackerConfig,
    events: EventBus,
    tasks: InMemoryEntityRepository<Task>,
    projects: InMemoryEntityRepository<Project>,
    milestones: InMemoryEntityRepository<Milestone>,
    clock: Arc<C>,
}

impl<C: Clock> TrackerRepository<C> {
    /// Creates an empty tracker with the default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(TrackerConfig::default(), clock)
    }

    /// Creates an empty tracker.
    #[must_use]
    pub fn with_config(config: TrackerConfig, clock: Arc<C>) -> Self {
        let events = EventBus::new();
        let forward = config.forwards_entity_events();
        let collection = |tag: &str| RepositoryConfig::new(tag).with_entity_forwarding(forward);
        Self {
            tasks: InMemoryEntityRepository::child_of(collection(TASK_TAG), &events),
            projects: InMemoryEntityRepository::child_of(collection(PROJECT_TAG), &events),
            milestones: InMemoryEntityRepository::child_of(collection(MILESTONE_TAG), &events),
            config,
            events,
            clock,
        }
    }

    /// Creates a tracker with the default configuration holding the
    /// entities of `data`.
    #[must_use]
    pub fn from_snapshot(data: RepositoryData, clock: Arc<C>) -> Self {
        Self::from_snapshot_with_config(TrackerConfig::default(), data, clock)
    }

    /// Creates a tracker holding the entities of `data`.
    ///
    /// Records without a status list take the defaults of `config`.
    #[must_use]
    pub fn from_snapshot_with_config(
        config: TrackerConfig,
        data: RepositoryData,
        clock: Arc<C>,
    ) -> Self {
        let tracker = Self::with_config(config, clock);
        tracker.restore(data);
        tracker
    }

    /// Creates a tracker with the default configuration from a JSON
    /// snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Snapshot`] for malformed documents.
    pub fn from_json(json: &str, clock: Arc<C>) -> TrackerResult<Self> {
        Self::from_json_with_config(TrackerConfig::default(), json, clock)
    }

    /// Creates a tracker from a JSON snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Snapshot`] for malformed documents.
    pub fn from_json_with_config(
        config: TrackerConfig,
        json: &str,
        clock: Arc<C>,
    ) -> TrackerResult<Self> {
        let data = snapshot::from_json(json)?;
        Ok(Self::from_snapshot_with_config(config, data, clock))
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the bus every collection bubbles into.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns the task collection.
    #[must_use]
    pub const fn tasks(&self) -> &InMemoryEntityRepository<Task> {
        &self.tasks
    }

    /// Returns the project collection.
    #[must_use]
    pub const fn projects(&self) -> &InMemoryEntityRepository<Project> {
        &self.projects
    }

    /// Returns the milestone collection.
    #[must_use]
    pub const fn milestones(&self) -> &InMemoryEntityRepository<Milestone> {
        &self.milestones
    }

    /// Creates a task and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidInput`] when the requested statuses
    /// are empty or blank, or the requested status is not among them.
    /// Nothing is stored on error.
    pub fn create_task(&self, request: CreateTaskRequest) -> TrackerResult<Rc<Task>> {
        let statuses = request
            .statuses
            .map(StatusList::new)
            .transpose()?
            .unwrap_or_else(|| self.config.default_task_statuses().clone());
        let task = Rc::new(Task::with_statuses(request.title, statuses, &*self.clock));
        if let Some(status) = request.status {
            task.set_status(&status)?;
        }
        if let Some(description) = request.description {
            task.set_description(description);
        }
        if !request.tags.is_empty() {
            task.add_tags(&request.tags);
        }
        if request.due_date.is_some() {
            task.set_due_date(request.due_date);
        }
        if request.counter.is_some() {
            task.set_counter(request.counter);
        }
        for project in request.projects {
            task.projects().link(project);
        }
        for milestone in request.milestones {
            task.milestones().link(milestone);
        }
        self.tasks.insert(Rc::clone(&task));
        Ok(task)
    }

    /// Creates a project and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidInput`] when the requested statuses
    /// are empty or blank. Nothing is stored on error.
    pub fn create_project(&self, request: CreateProjectRequest) -> TrackerResult<Rc<Project>> {
        let statuses = request
            .statuses
            .map(StatusList::new)
            .transpose()?
            .unwrap_or_else(|| self.config.default_project_statuses().clone());
        let project = Rc::new(Project::new(request.title, statuses));
        if let Some(description) = request.description {
            project.set_description(description);
        }
        if !request.tags.is_empty() {
            project.add_tags(&request.tags);
        }
        if request.due_date.is_some() {
            project.set_due_date(request.due_date);
        }
        self.projects.insert(Rc::clone(&project));
        Ok(project)
    }

    /// Creates a milestone and stores it.
    pub fn create_milestone(&self, request: CreateMilestoneRequest) -> Rc<Milestone> {
        let milestone = Rc::new(Milestone::new(request.title));
        if let Some(description) = request.description {
            milestone.set_description(description);
        }
        if !request.tags.is_empty() {
            milestone.add_tags(&request.tags);
        }
        if request.start_date.is_some() {
            milestone.set_start_date(request.start_date);
        }
        if request.due_date.is_some() {
            milestone.set_due_date(request.due_date);
        }
        for requirement in request.requirements {
            milestone.requirements().link(requirement);
        }
        self.milestones.insert(Rc::clone(&milestone));
        milestone
    }

    /// Returns the task stored under `id`.
    #[must_use]
    pub fn get_task(&self, id: &str) -> Option<Rc<Task>> {
        self.tasks.get(id)
    }

    /// Returns every task, in no particular order.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<Rc<Task>> {
        self.tasks.get_all()
    }

    /// Stores `task`, replacing any task with the same identifier.
    pub fn insert_task(&self, task: Rc<Task>) -> Option<Rc<Task>> {
        self.tasks.insert(task)
    }

    /// Removes the task stored under `id`. Returns `false` when absent.
    pub fn delete_task(&self, id: &str) -> bool {
        self.tasks.remove(id).is_some()
    }

    /// Returns the project stored under `id`.
    #[must_use]
    pub fn get_project(&self, id: &str) -> Option<Rc<Project>> {
        self.projects.get(id)
    }

    /// Returns every project, in no particular order.
    #[must_use]
    pub fn all_projects(&self) -> Vec<Rc<Project>> {
        self.projects.get_all()
    }

    /// Stores `project`, replacing any project with the same identifier.
    pub fn insert_project(&self, project: Rc<Project>) -> Option<Rc<Project>> {
        self.projects.insert(project)
    }

    /// Removes the project stored under `id`. Returns `false` when absent.
    pub fn delete_project(&self, id: &str) -> bool {
        self.projects.remove(id).is_some()
    }

    /// Returns the milestone stored under `id`.
    #[must_use]
    pub fn get_milestone(&self, id: &str) -> Option<Rc<Milestone>> {
        self.milestones.get(id)
    }

    /// Returns every milestone, in no particular order.
    #[must_use]
    pub fn all_milestones(&self) -> Vec<Rc<Milestone>> {
        self.milestones.get_all()
    }

    /// Stores `milestone`, replacing any milestone with the same identifier.
    pub fn insert_milestone(&self, milestone: Rc<Milestone>) -> Option<Rc<Milestone>> {
        self.milestones.insert(milestone)
    }

    /// Removes the milestone stored under `id`. Returns `false` when absent.
    pub fn delete_milestone(&self, id: &str) -> bool {
        self.milestones.remove(id).is_some()
    }

    /// Removes every entity and returns how many were removed.
    pub fn clear(&self) -> usize {
        let removed = self.tasks.clear() + self.projects.clear() + self.milestones.clear();
        debug!(removed, "tracker cleared");
        removed
    }

    /// Captures the state of every stored entity.
    #[must_use]
    pub fn snapshot(&self) -> RepositoryData {
        snapshot::capture(
            &self.all_tasks(),
            &self.all_projects(),
            &self.all_milestones(),
        )
    }

    /// Replaces the stored entities with those of `data`.
    ///
    /// Identifiers are kept; an empty identifier gets a fresh one. Persisted
    /// statuses are not checked against the persisted status, and status
    /// lists that are empty or blank fall back to the configured defaults.
    pub fn restore(&self, data: RepositoryData) {
        self.clear();
        let now = self.clock.utc();
        let task_statuses = self.config.default_task_statuses();
        let project_statuses = self.config.default_project_statuses();
        for (key, record) in data.tasks {
            let id = EntityId::from_optional(Some(key.as_str()));
            let persisted = record.into_persisted(id, now, task_statuses);
            self.tasks.insert(Rc::new(Task::from_persisted(persisted)));
        }
        for (key, record) in data.projects {
            let id = EntityId::from_optional(Some(key.as_str()));
            let persisted = record.into_persisted(id, project_statuses);
            self.projects
                .insert(Rc::new(Project::from_persisted(persisted)));
        }
        for (key, record) in data.milestones {
            let id = EntityId::from_optional(Some(key.as_str()));
            let persisted = record.into_persisted(id);
            self.milestones
                .insert(Rc::new(Milestone::from_persisted(persisted)));
        }
        debug!(
            tasks = self.tasks.len(),
            projects = self.projects.len(),
            milestones = self.milestones.len(),
            "tracker restored"
        );
    }

    /// Encodes the current state as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Snapshot`] when serialization fails.
    pub fn to_json(&self) -> TrackerResult<String> {
        Ok(snapshot::to_json(&self.snapshot())?)
    }

    /// Replaces the stored entities with those of a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Snapshot`] for malformed documents; the
    /// stored entities are left untouched.
    pub fn restore_json(&self, json: &str) -> TrackerResult<()> {
        let data = snapshot::from_json(json)?;
        self.restore(data);
        Ok(())
    }
}

impl Default for TrackerRepository<DefaultClock> {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl<C: Clock> fmt::Debug for TrackerRepository<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerRepository")
            .field("config", &self.config)
            .field("tasks", &self.tasks)
            .field("projects", &self.projects)
            .field("milestones", &self.milestones)
            .finish_non_exhaustive()
    }
}
