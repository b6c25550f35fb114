use thiserror::Error;

use crate::content::models::JourneyId;
use crate::content::models::ScenarioId;
use crate::content::models::WordId;
use crate::domain::lookup::LookupTimeout;
use crate::domain::patch::PatchError;

/// Error for typed ID parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid {kind} ID: {value}")]
    InvalidFormat { kind: &'static str, value: String },
}

/// Error for values outside a closed enumeration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {field}: {value}")]
pub struct UnknownVariantError {
    pub field: &'static str,
    pub value: String,
}

/// Top-level error for journey, scenario and word operations
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error(transparent)]
    InvalidValue(#[from] UnknownVariantError),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("Journey not found")]
    JourneyNotFound(JourneyId),

    #[error("Scenario not found")]
    ScenarioNotFound(ScenarioId),

    #[error("Word not found")]
    WordNotFound(WordId),

    #[error(transparent)]
    Timeout(#[from] LookupTimeout),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
