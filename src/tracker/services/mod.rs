//! Orchestration services for the tracker.

mod config;
mod requests;
mod tracker;

pub use config::TrackerConfig;
pub use requests::{CreateMilestoneRequest, CreateProjectRequest, CreateTaskRequest};
pub use tracker::{
    MILESTONE_TAG, PROJECT_TAG, TASK_TAG, TrackerError, TrackerRepository, TrackerResult,
};
