use thiserror::Error;

/// Validation failure while merging a patch map into an entity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("{field} must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("invalid {field}: {value} (expected one of {})", allowed.join(", "))]
    OutOfDomain {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A field table entry the entity does not know how to apply.
    #[error("field {field} cannot be patched")]
    Unsupported { field: &'static str },
}
