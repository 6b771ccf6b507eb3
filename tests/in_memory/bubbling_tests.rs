//! In-memory integration tests for event bubbling through the tracker.

use super::helpers::Recorder;
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::entity::domain::{StatusHolder, TagsHolder};
use taskboard::entity::ports::Entity;
use taskboard::events::{EventBus, EventPayload, names};
use taskboard::tracker::services::{
    CreateMilestoneRequest, CreateTaskRequest, TrackerConfig, TrackerRepository,
};

fn forwarding_tracker() -> TrackerRepository<DefaultClock> {
    TrackerRepository::with_config(
        TrackerConfig::new().with_entity_forwarding(true),
        Arc::new(DefaultClock),
    )
}

#[test]
fn forwarded_changes_reach_an_application_bus() -> eyre::Result<()> {
    let app = EventBus::new();
    let tracker = forwarding_tracker();
    tracker.events().bubble_to(&app)?;
    let recorder = Recorder::attach(&app, names::CHANGED);

    let task = tracker.create_task(CreateTaskRequest::new("Bubbly"))?;
    task.add_tag("Urgent");
    task.set_status("done")?;

    eyre::ensure!(
        recorder.names() == [names::CHANGED_TAGS, names::CHANGED_STATUS],
        "unexpected events {:?}",
        recorder.names()
    );
    let events = recorder.events();
    let tags = events
        .first()
        .ok_or_else(|| eyre::eyre!("no tag event"))?;
    eyre::ensure!(
        *tags.payload()
            == EventPayload::Tags {
                tags: vec!["urgent".to_owned()]
            },
        "unexpected payload {:?}",
        tags.payload()
    );
    Ok(())
}

#[test]
fn deleted_entities_stop_forwarding() -> eyre::Result<()> {
    let tracker = forwarding_tracker();
    let recorder = Recorder::attach(tracker.events(), names::CHANGED);
    let milestone = tracker.create_milestone(CreateMilestoneRequest::new("Cut"));

    milestone.add_tag("before");
    tracker.delete_milestone(milestone.id().as_str());
    milestone.add_tag("after");

    eyre::ensure!(
        recorder.names().len() == 1,
        "expected one forwarded change, got {:?}",
        recorder.names()
    );
    Ok(())
}

#[test]
fn tracker_events_do_not_flow_down_to_entities() -> eyre::Result<()> {
    let tracker = forwarding_tracker();
    let task = tracker.create_task(CreateTaskRequest::new("Leaf"))?;
    let recorder = Recorder::attach(task.events(), names::CHANGED);

    tracker.events().emit("changed.tags", EventPayload::Tags { tags: Vec::new() });

    eyre::ensure!(recorder.names().is_empty(), "entity saw a parent event");
    Ok(())
}

#[test]
fn detaching_the_tracker_silences_the_application_bus() -> eyre::Result<()> {
    let app = EventBus::new();
    let tracker = forwarding_tracker();
    tracker.events().bubble_to(&app)?;
    let recorder = Recorder::attach(&app, names::INSERTED);

    tracker.create_task(CreateTaskRequest::new("Seen"))?;
    eyre::ensure!(tracker.events().detach().is_some(), "tracker had no parent");
    tracker.create_task(CreateTaskRequest::new("Unseen"))?;

    eyre::ensure!(recorder.names() == ["inserted.task"], "unexpected events");
    Ok(())
}
