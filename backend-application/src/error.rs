use thiserror::Error;

use backend_domain::{DuplicateRecord, LookupKeyError, ReferenceKind};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{}", describe_missing(.kind, .value))]
    ReferenceNotFound { kind: ReferenceKind, value: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("failed to persist asset update: {0}")]
    Persistence(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn reference_not_found(kind: ReferenceKind, value: impl Into<String>) -> Self {
        AppError::ReferenceNotFound {
            kind,
            value: value.into(),
        }
    }

    /// Maps a repository insert failure, keeping uniqueness violations apart from storage faults.
    pub fn from_insert(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DuplicateRecord>() {
            Some(duplicate) => AppError::Conflict(duplicate.to_string()),
            None => AppError::Internal(err),
        }
    }
}

impl From<LookupKeyError> for AppError {
    fn from(value: LookupKeyError) -> Self {
        AppError::BadRequest(value.to_string())
    }
}

fn describe_missing(kind: &ReferenceKind, value: &str) -> String {
    kind.not_found_message(value)
}
