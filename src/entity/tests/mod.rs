//! Unit tests for the entity module.
//!
//! Tests are organised by entity part, covering happy paths, error cases,
//! and the notifications each part emits.

mod content_tests;
mod support;
mod tag_tests;
