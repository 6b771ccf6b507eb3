//! Given steps for task status BDD scenarios.

use std::rc::Rc;

use super::world::TaskStatusWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::entity::ports::Entity;
use taskboard::events::names;
use taskboard::tracker::services::CreateTaskRequest;

#[given(r#"a new task titled "{title}""#)]
fn new_task(world: &mut TaskStatusWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .tracker
        .create_task(CreateTaskRequest::new(title))
        .wrap_err("create task for scenario")?;
    world.task = Some(task);
    Ok(())
}

#[given("status changes are being recorded")]
fn record_status_changes(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let counter = Rc::clone(&world.status_changes);
    let subscription = world
        .task()?
        .events()
        .handle(names::CHANGED_STATUS, move |_| counter.set(counter.get() + 1));
    world.subscriptions.push(subscription);
    Ok(())
}

#[given("inserted events are being recorded")]
fn record_inserted(world: &mut TaskStatusWorld) {
    let counter = Rc::clone(&world.inserted);
    let subscription = world
        .tracker
        .events()
        .handle(names::INSERTED, move |_| counter.set(counter.get() + 1));
    world.subscriptions.push(subscription);
}
