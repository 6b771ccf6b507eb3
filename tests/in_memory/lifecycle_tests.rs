//! In-memory integration tests for tracker lifecycle operations.

use super::helpers::{Recorder, TestTracker, tracker};
use rstest::rstest;
use std::rc::Rc;
use taskboard::entity::domain::{ContentHolder, StatusHolder, TagsHolder};
use taskboard::entity::ports::Entity;
use taskboard::events::{EventPayload, names};
use taskboard::tracker::{
    domain::Task,
    services::{CreateMilestoneRequest, CreateProjectRequest, CreateTaskRequest},
};

#[rstest]
fn task_walks_through_default_statuses(tracker: TestTracker) -> eyre::Result<()> {
    let task = tracker.create_task(CreateTaskRequest::new("Release notes"))?;
    let recorder = Recorder::attach(task.events(), names::CHANGED_STATUS);

    task.increase_status()?.increase_status()?.increase_status()?;

    eyre::ensure!(task.status() == "done", "unexpected status {}", task.status());
    eyre::ensure!(
        recorder.names().len() == 2,
        "expected two status changes, got {:?}",
        recorder.names()
    );
    task.decrease_status()?;
    eyre::ensure!(task.status() == "in progress", "decrease did not step back");
    Ok(())
}

#[rstest]
fn lookup_after_delete_reports_absent(tracker: TestTracker) -> eyre::Result<()> {
    let task = tracker.create_task(CreateTaskRequest::new("Transient"))?;
    let id = task.id().clone();

    eyre::ensure!(tracker.delete_task(id.as_str()), "first delete should succeed");
    eyre::ensure!(tracker.get_task(id.as_str()).is_none(), "task still present");
    eyre::ensure!(!tracker.delete_task(id.as_str()), "second delete should be a no-op");
    Ok(())
}

#[rstest]
fn reinserting_a_removed_task_restores_it(tracker: TestTracker) -> eyre::Result<()> {
    let task = tracker.create_task(CreateTaskRequest::new("Boomerang"))?;
    tracker.delete_task(task.id().as_str());

    let previous = tracker.insert_task(Rc::clone(&task));

    eyre::ensure!(previous.is_none(), "collection should have been empty");
    let found = tracker
        .get_task(task.id().as_str())
        .ok_or_else(|| eyre::eyre!("task missing after reinsert"))?;
    eyre::ensure!(Rc::ptr_eq(&found, &task), "a different task was stored");
    Ok(())
}

#[rstest]
fn tracker_bus_sees_inserted_entities(tracker: TestTracker) -> eyre::Result<()> {
    let recorder = Recorder::attach(tracker.events(), names::INSERTED);

    let task = tracker.create_task(CreateTaskRequest::new("Observed"))?;
    tracker.create_project(CreateProjectRequest::new("Umbrella"))?;
    tracker.create_milestone(CreateMilestoneRequest::new("Launch"));

    eyre::ensure!(
        recorder.names() == ["inserted.task", "inserted.project", "inserted.milestone"],
        "unexpected events {:?}",
        recorder.names()
    );
    let events = recorder.events();
    let first = events
        .first()
        .ok_or_else(|| eyre::eyre!("no inserted event recorded"))?;
    let EventPayload::Entity { entity_id, entity } = first.payload() else {
        return Err(eyre::eyre!("unexpected payload {:?}", first.payload()));
    };
    eyre::ensure!(entity_id == task.id(), "payload id mismatch");
    eyre::ensure!(entity.is::<Task>(), "payload should carry the task");
    Ok(())
}

#[rstest]
fn related_ids_link_entities_across_collections(tracker: TestTracker) -> eyre::Result<()> {
    let project = tracker.create_project(CreateProjectRequest::new("Docs site"))?;
    let milestone = tracker.create_milestone(CreateMilestoneRequest::new("Beta"));
    let task = tracker.create_task(
        CreateTaskRequest::new("Write guide")
            .with_projects([project.id().clone()])
            .with_milestones([milestone.id().clone()]),
    )?;
    milestone.requirements().link(task.id().clone());

    let in_project: Vec<_> = tracker
        .all_tasks()
        .into_iter()
        .filter(|candidate| candidate.projects().contains(project.id().as_str()))
        .collect();

    eyre::ensure!(in_project.len() == 1, "expected one task in the project");
    eyre::ensure!(
        milestone.requirements().contains(task.id().as_str()),
        "milestone should require the task"
    );
    Ok(())
}

#[rstest]
fn tag_queries_see_normalized_values(tracker: TestTracker) -> eyre::Result<()> {
    let task = tracker.create_task(CreateTaskRequest::new("Tagged").with_tags([" UI ", "ux"]))?;

    eyre::ensure!(task.contains_tag("ui"), "normalized tag missing");
    eyre::ensure!(task.contains_all_tags(["UX", "Ui"]), "mixed-case query failed");
    eyre::ensure!(!task.contains_all_tags(["ui", "api"]), "api is not a tag");
    task.set_title("Tagged and titled");
    eyre::ensure!(task.title() == "Tagged and titled", "title not updated");
    Ok(())
}
