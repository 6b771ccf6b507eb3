//! Error types for entity part validation.

use thiserror::Error;

/// Invalid input rejected by a status machine before any state changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The status is not one of the available statuses.
    #[error("invalid status: {0}")]
    UnknownStatus(String),

    /// The current status is no longer listed, so it has no position to
    /// move from.
    #[error("invalid status: {0}")]
    OrphanedStatus(String),

    /// The list of available statuses is empty or absent.
    #[error("available statuses cannot be empty")]
    EmptyStatusList,

    /// Every supplied status is blank after normalization.
    #[error("statuses cannot be empty strings")]
    BlankStatusList,
}
