use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::lookup::bounded;
use crate::domain::user::models::AuthSession;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Authentication service: registration, login and current-user lookup.
///
/// Argon2 work runs on the blocking pool so it never stalls the async
/// workers serving unrelated requests.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    lookup_timeout: Duration,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - Credential record persistence
    /// * `authenticator` - Hasher and token codec bound to the signing secret
    /// * `lookup_timeout` - Upper bound for each repository read
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            authenticator,
            lookup_timeout,
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        bounded(
            "user lookup by email",
            self.lookup_timeout,
            self.repository.find_user_by_email(email),
        )
        .await
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, UserError> {
        if self.find_by_email(command.email.as_str()).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            role: command.role,
            display_name: command.display_name,
            created_at: now,
            updated_at: now,
        };

        let user = self.repository.create_user(user).await?;
        let issued = self
            .authenticator
            .issue_token(user.id, user.role.as_str())?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthSession {
            user,
            token: issued.access_token,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError> {
        if command.email.is_empty() || command.password.is_empty() {
            return Err(UserError::InvalidCredentials);
        }

        let found = self.find_by_email(&command.email).await?;
        let user = match found {
            Some(user) => user,
            None => {
                let authenticator = Arc::clone(&self.authenticator);
                let password = command.password;
                tokio::task::spawn_blocking(move || authenticator.reject_unknown(&password))
                    .await
                    .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

                tracing::debug!("Login rejected: unknown email");
                return Err(UserError::InvalidCredentials);
            }
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password_hash = user.password_hash.clone();
        let (user_id, role) = (user.id, user.role);
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&command.password, &password_hash, user_id, role.as_str())
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        let issued = outcome.map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::debug!(user_id = %user_id, "Login rejected: wrong password");
                UserError::InvalidCredentials
            }
            AuthenticationError::Password(err) => UserError::Password(err),
            AuthenticationError::Token(err) => UserError::Token(err),
        })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            user,
            token: issued.access_token,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        bounded(
            "user lookup by id",
            self.lookup_timeout,
            self.repository.find_user_by_id(id),
        )
        .await?
        .ok_or(UserError::NotFound(id.to_string()))
    }
}
