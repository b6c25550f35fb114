use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Argon2id PHC string with the default parameters that no stored credential
/// shares. Verified when a login names an account that does not exist.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$LXEWQrcmsEQBYnyp+6wy9chTD7GQPMTbAiWHF5IaSIE";

/// Authentication coordinator combining credential hashing and token issuance.
///
/// Holds the signing secret (through its codec) and the token lifetime, both
/// supplied explicitly at construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
}

/// Result of a successful authentication or token issuance.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,

    /// Claims encoded in `access_token`
    pub claims: Claims,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Token signing secret
    /// * `token_ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(secret),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against its stored hash and issue a token on success.
    ///
    /// # Arguments
    /// * `password` - Plaintext password presented by the caller
    /// * `stored_hash` - Hash read from the credential record
    /// * `subject` - Identifier placed in the `sub` claim
    /// * `role` - Role placed in the `role` claim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be read
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        role: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject, role)?)
    }

    /// Reject a login for an unknown subject after a full verification.
    ///
    /// Runs the same Argon2 work as [`authenticate`](Self::authenticate) so the
    /// response time does not reveal whether the subject exists.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, DECOY_HASH);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the credentials were just created.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn issue_token(
        &self,
        subject: impl ToString,
        role: impl ToString,
    ) -> Result<AuthenticationResult, TokenError> {
        let claims = Claims::new(subject, role, chrono::Utc::now(), self.token_ttl);
        let access_token = self.token_codec.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            claims,
        })
    }

    /// Validate and decode a presented token.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, tampered with or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.decode(token)
    }
}
