//! JSON snapshot adapter for tracker state.

mod dates;
mod models;

pub(crate) use models::capture;
pub use models::{MilestoneRecord, ProjectRecord, RepositoryData, TaskRecord};

use thiserror::Error;

/// Errors raised at the JSON boundary.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The document could not be encoded or decoded.
    #[error("snapshot JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes `data` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SnapshotError::Json`] when serialization fails.
pub fn to_json(data: &RepositoryData) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Decodes a snapshot document.
///
/// Missing collections and optional fields take their defaults; unknown
/// fields are ignored.
///
/// # Errors
///
/// Returns [`SnapshotError::Json`] for malformed documents.
pub fn from_json(json: &str) -> Result<RepositoryData, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
