use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::RoleError;
use crate::user::errors::UserIdError;

/// Credential record of a registered user.
///
/// `password_hash` is a PHC string; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Coarse authorization role.
///
/// Closed domain: anything other than `admin` or `learner` is rejected at
/// registration and when read back from a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Learner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Learner => "learner",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "learner" => Ok(Role::Learner),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser, then narrows it to
/// plain `local@host.tld` addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// Quoted local parts, domain literals and dotless or numeric-TLD domains
    /// are refused even though RFC 5322 allows them.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322 or is not a
    ///   plain `local@host.tld` address
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        if !Self::is_plain(&email) {
            return Err(EmailError::InvalidFormat(
                "expected local@host.tld with an alphabetic top-level domain".to_string(),
            ));
        }

        Ok(EmailAddress(email))
    }

    fn is_plain(email: &str) -> bool {
        let Some((local, domain)) = email.rsplit_once('@') else {
            return false;
        };
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return false;
        };

        let local_ok = !local.is_empty()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
        let domain_ok = !host.is_empty()
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c));
        let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

        local_ok && domain_ok && tld_ok
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that satisfied the registration policy.
///
/// Only lives until it is hashed. `Debug` is redacted so it cannot leak
/// through logs or error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Validate a new password: at least 8 characters, at least one digit.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `MissingDigit` - No ASCII digit
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Authenticated caller, attached to each protected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: Password,
    pub display_name: String,
    pub role: Role,
}

/// Command to log in.
///
/// Fields are raw on purpose: login must not reveal which part was wrong, so
/// nothing here is validated beyond presence.
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A user together with a freshly issued access token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_closed_domain() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("learner".parse::<Role>(), Ok(Role::Learner));
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(RoleError::Unknown("Admin".to_string()))
        );
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new("Passw0rd".to_string()).is_ok());
        assert_eq!(
            Password::new("Pass0rd".to_string()),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 7 })
        );
        assert_eq!(
            Password::new("Password".to_string()),
            Err(PasswordPolicyError::MissingDigit)
        );
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("Sup3rSecret".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("Sup3rSecret"));

        let command = LoginCommand {
            email: "a@x.com".to_string(),
            password: "Sup3rSecret".to_string(),
        };
        assert!(!format!("{:?}", command).contains("Sup3rSecret"));
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
        assert!(EmailAddress::new("first.last+tag@mail.example.org".to_string()).is_ok());
        assert!(EmailAddress::new("a_b%c@x-y.co".to_string()).is_ok());
    }

    #[test]
    fn test_email_requires_plain_dotted_domain() {
        for email in [
            "a@localhost",
            "a@x",
            "\"a b\"@x.com",
            "a@[127.0.0.1]",
            "a@x.c",
            "a@x.c0m",
            "a@x.123",
        ] {
            assert!(
                matches!(
                    EmailAddress::new(email.to_string()),
                    Err(EmailError::InvalidFormat(_))
                ),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_identity_has_role() {
        let identity = Identity::new(UserId::new(), Role::Learner);
        assert!(identity.has_role(Role::Learner));
        assert!(!identity.has_role(Role::Admin));
    }
}
