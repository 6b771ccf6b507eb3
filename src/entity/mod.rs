//! Reactive entity-management substrate.
//!
//! Entities are composites of small parts (identity, tag set, status
//! machine, content) whose event buses bubble into the entity's own bus.
//! Repositories store entities by identifier and announce lifecycle changes.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
