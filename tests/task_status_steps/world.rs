//! Shared world state for task status BDD scenarios.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::events::Subscription;
use taskboard::tracker::{domain::Task, services::TrackerRepository};

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub tracker: TrackerRepository<DefaultClock>,
    pub task: Option<Rc<Task>>,
    pub status_changes: Rc<Cell<usize>>,
    pub inserted: Rc<Cell<usize>>,
    pub subscriptions: Vec<Subscription>,
}

impl TaskStatusWorld {
    /// Creates a world around an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: TrackerRepository::new(Arc::new(DefaultClock)),
            task: None,
            status_changes: Rc::default(),
            inserted: Rc::default(),
            subscriptions: Vec::new(),
        }
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Rc<Task>, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}
