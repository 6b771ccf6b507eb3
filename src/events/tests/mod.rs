//! Unit tests for the event bus.
//!
//! Tests cover handler ordering, namespaced matching, removal during
//! dispatch, and bubbling through parent chains.
