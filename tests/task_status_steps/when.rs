//! When steps for task status BDD scenarios.

use std::rc::Rc;

use super::world::TaskStatusWorld;
use rstest_bdd_macros::when;
use taskboard::entity::domain::{StatusHolder, TagsHolder};

#[when("the task status is increased {times:usize} times")]
fn increase_status(world: &mut TaskStatusWorld, times: usize) -> Result<(), eyre::Report> {
    let task = world.task()?;
    for _ in 0..times {
        task.increase_status()?;
    }
    Ok(())
}

#[when(r#"the tag "{tag}" is added"#)]
fn add_tag(world: &mut TaskStatusWorld, tag: String) -> Result<(), eyre::Report> {
    world.task()?.add_tag(&tag);
    Ok(())
}

#[when("the task is inserted again")]
fn insert_again(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let task = Rc::clone(world.task()?);
    let previous = world.tracker.insert_task(task);
    eyre::ensure!(previous.is_some(), "task was not stored before reinsert");
    Ok(())
}
