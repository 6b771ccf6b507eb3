//! Task tracking on top of the reactive entity model.
//!
//! Tasks, projects, and milestones live in one [`services::TrackerRepository`]
//! whose collections announce insertions and removals on a shared bus. The
//! module follows hexagonal architecture:
//!
//! - Entity types in [`domain`]
//! - The JSON snapshot format in [`adapters`]
//! - The aggregate repository, its configuration, and creation requests in
//!   [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
