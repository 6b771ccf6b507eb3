//! Taskboard: reactive entity management for task tracking.
//!
//! This crate provides composable building blocks for tracked entities whose
//! state changes are announced synchronously on event buses and bubble
//! outward to any interested observer.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Entity parts and concrete entities with no storage concerns
//! - **Ports**: Abstract trait interfaces for keyed entity storage
//! - **Adapters**: In-memory repositories and the JSON snapshot format
//!
//! # Modules
//!
//! - [`events`]: Event bus, events, and bubbling
//! - [`entity`]: Tag sets, status machines, composition, and repositories
//! - [`tracker`]: Tasks, projects, milestones, and the aggregate repository
//!
//! # Example
//!
//! ```
//! use taskboard::entity::domain::{StatusHolder, TagsHolder};
//! use taskboard::tracker::services::{CreateTaskRequest, TrackerRepository};
//!
//! # fn main() -> Result<(), taskboard::tracker::services::TrackerError> {
//! let tracker: TrackerRepository = TrackerRepository::default();
//! let task = tracker.create_task(CreateTaskRequest::new("Write docs").with_tags(["Docs"]))?;
//! task.increase_status()?;
//! assert_eq!(task.status(), "in progress");
//! assert!(task.contains_tag("docs"));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod events;
pub mod tracker;
