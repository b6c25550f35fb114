//! Authentication primitives shared by the content services.
//!
//! - Credential hashing (Argon2id, salted per hash)
//! - Stateless access tokens (HS256 JWT, fixed lifetime, no revocation)
//! - An [`Authenticator`] coordinating the two
//!
//! The crate knows nothing about users, roles or resources: subjects and roles
//! are plain strings here and each service maps them onto its own types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Passw0rd").unwrap();
//! assert!(hasher.verify("Passw0rd", &hash).unwrap());
//! assert!(!hasher.verify("passw0rd", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenCodec, TokenError};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("user123", "learner", Duration::hours(24)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//!
//! let expired = codec.issue("user123", "learner", Duration::hours(-1)).unwrap();
//! assert_eq!(codec.decode(&expired), Err(TokenError::Expired));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("Passw0rd").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("Passw0rd", &hash, "user123", "admin").unwrap();
//!
//! // Every later request: validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.role, "admin");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
