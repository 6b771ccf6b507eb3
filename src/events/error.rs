//! Error types for event bus wiring.

use thiserror::Error;

/// Errors returned while wiring event buses together.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EventBusError {
    /// The requested bubbling target is the bus itself or one of its
    /// descendants, which would make dispatch recurse forever.
    #[error("bubbling target would create a cycle")]
    BubbleCycle,
}
