//! Tests for normalization and the tag set.

use super::support::capture;
use crate::entity::domain::{TagSet, normalize};
use crate::events::{EventPayload, names};
use rstest::{fixture, rstest};

#[fixture]
fn tags() -> TagSet {
    TagSet::new()
}

// ============================================================================
// normalize
// ============================================================================

#[rstest]
#[case("  Urgent ", "urgent")]
#[case("IN PROGRESS", "in progress")]
#[case("\tMixed Case\n", "mixed case")]
#[case("", "")]
#[case("   ", "")]
fn normalize_trims_and_folds_case(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[rstest]
#[case("  Urgent ")]
#[case("ÄBC ")]
#[case("already")]
fn normalize_is_idempotent(#[case] input: &str) {
    let once = normalize(input);
    assert_eq!(normalize(&once), once);
}

// ============================================================================
// add
// ============================================================================

#[rstest]
fn add_tags_normalizes_and_deduplicates(tags: TagSet) {
    tags.add_tags(["  A  ", "a", "B"]);
    assert_eq!(tags.tags(), vec!["a", "b"]);
}

#[rstest]
#[case("Release")]
#[case("  release")]
#[case("RELEASE  ")]
fn added_tag_is_contained_regardless_of_case(tags: TagSet, #[case] query: &str) {
    tags.add_tag("Release");
    assert!(tags.contains_tag(query));
}

#[rstest]
fn add_keeps_insertion_order(tags: TagSet) {
    tags.add_tag("zeta").add_tag("alpha").add_tag("mid");
    assert_eq!(tags.tags(), vec!["zeta", "alpha", "mid"]);
}

#[rstest]
fn add_tags_emits_once_with_full_list(tags: TagSet) {
    tags.add_tag("existing");
    let captured = capture(tags.events(), names::CHANGED_TAGS);

    tags.add_tags(["One", "two"]);

    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured.events().first().map(|event| event.payload().clone()),
        Some(EventPayload::Tags {
            tags: vec!["existing".to_owned(), "one".to_owned(), "two".to_owned()],
        })
    );
}

#[rstest]
fn adding_a_present_tag_still_emits(tags: TagSet) {
    tags.add_tag("dup");
    let captured = capture(tags.events(), names::CHANGED_TAGS);

    tags.add_tag("DUP");

    assert_eq!(captured.len(), 1);
    assert_eq!(tags.len(), 1);
}

#[rstest]
fn empty_string_is_a_legal_tag(tags: TagSet) {
    tags.add_tag("");
    assert_eq!(tags.tags(), vec![""]);
    assert!(tags.contains_tag("  "));
}

#[test]
fn with_tags_builds_a_normalized_set() {
    let tags = TagSet::with_tags(["B", " b", "C"]);
    assert_eq!(tags.tags(), vec!["b", "c"]);
}

// ============================================================================
// remove
// ============================================================================

#[rstest]
fn remove_emits_remaining_tags(tags: TagSet) {
    tags.add_tags(["a", "b", "c"]);
    let captured = capture(tags.events(), names::CHANGED_TAGS);

    tags.remove_tags([" A", "c"]);

    assert_eq!(tags.tags(), vec!["b"]);
    assert_eq!(
        captured.events().first().map(|event| event.payload().clone()),
        Some(EventPayload::Tags {
            tags: vec!["b".to_owned()],
        })
    );
}

#[rstest]
fn removing_an_absent_tag_is_tolerated(tags: TagSet) {
    tags.add_tag("kept");
    let captured = capture(tags.events(), names::CHANGED_TAGS);

    tags.remove_tag("missing");

    assert_eq!(tags.tags(), vec!["kept"]);
    assert_eq!(captured.len(), 1);
}

// ============================================================================
// contains
// ============================================================================

#[rstest]
fn empty_set_contains_nothing(tags: TagSet) {
    assert!(!tags.contains_tag(""));
    assert!(!tags.contains_tag("any"));
}

#[rstest]
fn empty_query_on_empty_set_is_false(tags: TagSet) {
    assert!(!tags.contains_all_tags(Vec::<String>::new()));
}

#[rstest]
fn empty_query_on_non_empty_set_is_true(tags: TagSet) {
    tags.add_tag("x");
    assert!(tags.contains_all_tags(Vec::<String>::new()));
}

#[rstest]
#[case(&["a", "b"], true)]
#[case(&[" A ", "C"], true)]
#[case(&["a", "missing"], false)]
#[case(&["missing"], false)]
fn multi_tag_query_is_conjunctive(
    tags: TagSet,
    #[case] query: &[&str],
    #[case] expected: bool,
) {
    tags.add_tags(["a", "b", "c"]);
    assert_eq!(tags.contains_all_tags(query), expected);
}

#[rstest]
fn returned_tags_are_a_copy(tags: TagSet) {
    tags.add_tag("a");
    let mut copy = tags.tags();
    copy.push("b".to_owned());
    assert_eq!(tags.tags(), vec!["a"]);
}
