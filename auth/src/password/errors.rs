use thiserror::Error;

/// Error type for credential hashing.
///
/// Both variants are internal failures. A plaintext that simply does not
/// match is reported as `Ok(false)` by `verify`, never as an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is unreadable: {0}")]
    InvalidHash(String),
}
