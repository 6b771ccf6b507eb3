//! Tests for content, relation, and counter parts.

use super::support::capture;
use crate::entity::domain::{Content, Counter, EntityId, RelatedIds, Relation};
use crate::events::{EventPayload, names};
use rstest::rstest;

#[rstest]
fn content_setters_store_and_emit() {
    let content = Content::new();
    let captured = capture(content.events(), names::CHANGED_CONTENT);

    content.set_title("Plan release");
    content.set_description("Draft **notes**");

    assert_eq!(content.title(), "Plan release");
    assert_eq!(content.description(), "Draft **notes**");
    let payloads: Vec<EventPayload> = captured
        .events()
        .iter()
        .map(|event| event.payload().clone())
        .collect();
    assert_eq!(
        payloads,
        vec![
            EventPayload::Title {
                title: "Plan release".to_owned()
            },
            EventPayload::Description {
                description: "Draft **notes**".to_owned()
            },
        ]
    );
}

#[rstest]
fn related_ids_link_once_and_emit_on_change() {
    let projects = RelatedIds::new(Relation::Projects);
    let captured = capture(projects.events(), names::CHANGED_RELATIONS);

    projects.link("p-1").link("p-2").link("p-1");

    assert_eq!(
        projects.ids(),
        vec![EntityId::from("p-1"), EntityId::from("p-2")]
    );
    assert_eq!(captured.len(), 2);
    assert!(projects.contains("p-2"));
}

#[rstest]
fn unlink_removes_and_reports_remaining_ids() {
    let requirements = RelatedIds::new(Relation::Requirements);
    requirements.link("m-1").link("m-2");
    let captured = capture(requirements.events(), names::CHANGED_RELATIONS);

    requirements.unlink("m-1").unlink("missing");

    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured.events().first().map(|event| event.payload().clone()),
        Some(EventPayload::Relations {
            relation: Relation::Requirements,
            ids: vec![EntityId::from("m-2")],
        })
    );
}

#[rstest]
#[case(Relation::Projects, "projects")]
#[case(Relation::Milestones, "milestones")]
#[case(Relation::Requirements, "requirements")]
fn relation_names_are_stable(#[case] relation: Relation, #[case] expected: &str) {
    assert_eq!(relation.to_string(), expected);
}

#[test]
fn counter_reports_states_and_totals() {
    let counter = Counter::new(6)
        .with_state("pending", 2)
        .with_state("in progress", 1)
        .with_state("done", 3);

    assert_eq!(counter.total(), 6);
    assert_eq!(counter.count("done"), 3);
    assert_eq!(counter.count("missing"), 0);
    assert_eq!(counter.counted(), 6);
}

#[test]
fn counter_serializes_as_states_and_total() {
    let counter = Counter::new(2).with_state("done", 1);

    let json = serde_json::to_value(&counter).expect("serializable counter");

    assert_eq!(
        json,
        serde_json::json!({ "states": { "done": 1 }, "total": 2 })
    );
}
