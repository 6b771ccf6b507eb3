//! Canonical form for tags and statuses.

/// Trims surrounding whitespace and folds case.
///
/// Applied to every tag and status before storage or comparison. The
/// transform is idempotent.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
