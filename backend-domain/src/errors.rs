// Domain errors shared between ports and their implementations

use thiserror::Error;

/// Returned by a repository when a record would break a uniqueness rule.
/// Implementations wrap it in `anyhow::Error`; callers recover it with `downcast_ref`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} '{value}' already exists")]
pub struct DuplicateRecord {
    pub kind: &'static str,
    pub value: String,
}

impl DuplicateRecord {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
