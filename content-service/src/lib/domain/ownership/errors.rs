use thiserror::Error;

use super::models::ResourceRef;
use crate::content::errors::ContentError;
use crate::domain::lookup::LookupTimeout;

/// Failure to reach an ownership decision.
///
/// None of these is an answer: a caller must not read `NotFound` as "not
/// owned" or any other variant as "owned".
#[derive(Debug, Clone, Error)]
pub enum OwnershipError {
    /// A resource on the chain could not be resolved.
    ///
    /// `missing` is the hop that failed, which may be an ancestor of
    /// `requested`.
    #[error("{missing} not found")]
    NotFound {
        requested: ResourceRef,
        missing: ResourceRef,
    },

    #[error(transparent)]
    Timeout(#[from] LookupTimeout),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<ContentError> for OwnershipError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Timeout(timeout) => OwnershipError::Timeout(timeout),
            other => OwnershipError::Repository(other.to_string()),
        }
    }
}
