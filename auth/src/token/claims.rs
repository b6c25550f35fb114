use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried inside an access token.
///
/// The set is deliberately fixed: subject, role and the validity window.
/// Services interpret `sub` and `role` with their own domain types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Coarse role of the subject at issuance time
    pub role: String,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims valid from `issued_at` for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Unique subject identifier
    /// * `role` - Role name recorded in the token
    /// * `issued_at` - Start of the validity window
    /// * `ttl` - Length of the validity window
    pub fn new(
        subject: impl ToString,
        role: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Check whether the token is past its expiration.
    ///
    /// A token is still valid during the exact second of `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
