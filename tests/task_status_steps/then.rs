//! Then steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use rstest_bdd_macros::then;
use taskboard::entity::domain::{StatusHolder, TagsHolder};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.status();
    eyre::ensure!(actual == status, "expected status {status}, found {actual}");
    Ok(())
}

#[then("{count:usize} status changes were recorded")]
fn status_changes_recorded(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let recorded = world.status_changes.get();
    eyre::ensure!(
        recorded == count,
        "expected {count} status changes, recorded {recorded}"
    );
    Ok(())
}

#[then(r#"the task tags are "{tags}""#)]
fn task_tags_are(world: &TaskStatusWorld, tags: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = tags.split(',').collect();
    let actual = world.task()?.tags();
    eyre::ensure!(actual == expected, "expected tags {expected:?}, found {actual:?}");
    Ok(())
}

#[then("the tracker holds {count:usize} task")]
fn tracker_holds(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.tracker.all_tasks().len();
    eyre::ensure!(stored == count, "expected {count} tasks, found {stored}");
    Ok(())
}

#[then("{count:usize} inserted events were recorded")]
fn inserted_recorded(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let recorded = world.inserted.get();
    eyre::ensure!(
        recorded == count,
        "expected {count} inserted events, recorded {recorded}"
    );
    Ok(())
}
