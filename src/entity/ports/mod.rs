//! Port contracts for entity storage.
//!
//! Ports define the interfaces repositories expose to services and callers.

pub mod repository;

pub use repository::{Entity, EntityStore};
