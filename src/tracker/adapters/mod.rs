//! Adapters for tracker persistence.

pub mod snapshot;
