//! Behaviour tests for task status and tag management.

#[path = "task_status_steps/mod.rs"]
mod task_status_steps_defs;

use rstest_bdd_macros::scenario;
use task_status_steps_defs::world::{TaskStatusWorld, world};

#[scenario(
    path = "tests/features/task_status.feature",
    name = "Increasing a task past its last status"
)]
fn increase_past_last_status(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status.feature",
    name = "Tags are normalized and deduplicated"
)]
fn tags_are_normalized(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status.feature",
    name = "Inserting the same task twice"
)]
fn inserting_twice(world: TaskStatusWorld) {
    let _ = world;
}
