//! Tracked entities: tasks, projects, and milestones.
//!
//! Each entity embeds an [`EntityCore`](crate::entity::domain::EntityCore)
//! and adds its own dated or relational fields.

mod milestone;
mod project;
mod task;

pub use milestone::{Milestone, PersistedMilestoneData};
pub use project::{
    DEFAULT_PROJECT_STATUSES, PersistedProjectData, Project, default_project_statuses,
};
pub use task::{PersistedTaskData, Task};
