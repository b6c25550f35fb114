use thiserror::Error;

use crate::domain::lookup::LookupTimeout;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for plaintext password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one number")]
    MissingDigit,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("invalid role: {0}")]
    Unknown(String),
}

/// Top-level error for authentication and user operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    #[error(transparent)]
    InvalidRole(#[from] RoleError),

    // Domain-level errors
    #[error("user with this email already exists")]
    EmailAlreadyExists(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Credential hashing failed: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token issuance failed: {0}")]
    Token(#[from] auth::TokenError),

    #[error(transparent)]
    Timeout(#[from] LookupTimeout),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
