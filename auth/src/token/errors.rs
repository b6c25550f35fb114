use thiserror::Error;

/// Error type for token operations.
///
/// Decoding failures keep their cause so callers can log it; the HTTP layer
/// is expected to collapse all of them into a single unauthorized answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

impl TokenError {
    /// Short, stable label of the failure cause for structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed(_) => "malformed",
            TokenError::SignatureInvalid => "signature_invalid",
            TokenError::Expired => "expired",
            TokenError::EncodingFailed(_) => "encoding_failed",
        }
    }
}
