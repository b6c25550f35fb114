use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::Identity;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Why a request was stopped before reaching its handler.
///
/// Every token problem collapses into `InvalidToken` so callers cannot tell
/// a tampered token from an expired one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    MissingHeader,
    MalformedHeader,
    InvalidToken,
    InsufficientRole,
}

impl GuardRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            GuardRejection::InsufficientRole => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GuardRejection::MissingHeader => "Missing authorization header",
            GuardRejection::MalformedHeader => "Invalid authorization header format",
            GuardRejection::InvalidToken => "Invalid or expired token",
            GuardRejection::InsufficientRole => "Insufficient permissions",
        }
    }
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Middleware that validates the bearer token and attaches the caller's
/// [`Identity`] to the request extensions.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, GuardRejection> {
    let token = parse_bearer(req.headers().get(AUTHORIZATION))?;

    // Validate token and extract claims (from auth library)
    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = e.reason(), "Token rejected");
        GuardRejection::InvalidToken
    })?;

    let identity = identity_from_claims(&claims).ok_or_else(|| {
        tracing::warn!(reason = "claims_unusable", "Token rejected");
        GuardRejection::InvalidToken
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Middleware that admits only callers holding `required`.
///
/// Must be layered inside [`authenticate`], which supplies the identity.
pub async fn require_role(
    State(required): State<Role>,
    req: Request,
    next: Next,
) -> Result<Response, GuardRejection> {
    match req.extensions().get::<Identity>() {
        Some(identity) if identity.has_role(required) => Ok(next.run(req).await),
        _ => Err(GuardRejection::InsufficientRole),
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// # Errors
/// * `MissingHeader` - No header present
/// * `MalformedHeader` - Not UTF-8, wrong scheme, or empty token
pub fn parse_bearer(header: Option<&HeaderValue>) -> Result<&str, GuardRejection> {
    let value = header.ok_or(GuardRejection::MissingHeader)?;
    if value.is_empty() {
        return Err(GuardRejection::MissingHeader);
    }

    let value = value.to_str().map_err(|_| GuardRejection::MalformedHeader)?;
    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() && !token.contains(' ') => Ok(token),
        _ => Err(GuardRejection::MalformedHeader),
    }
}

fn identity_from_claims(claims: &auth::Claims) -> Option<Identity> {
    let user_id = UserId::from_string(&claims.sub).ok()?;
    let role = claims.role.parse::<Role>().ok()?;
    Some(Identity::new(user_id, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(value: &str) -> HeaderValue {
        HeaderValue::from_str(value).unwrap()
    }

    #[test]
    fn test_parse_bearer_accepts_exact_form() {
        let value = header("Bearer abc.def.ghi");
        assert_eq!(parse_bearer(Some(&value)), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_parse_bearer_missing() {
        assert_eq!(parse_bearer(None), Err(GuardRejection::MissingHeader));
        assert_eq!(
            parse_bearer(Some(&header(""))),
            Err(GuardRejection::MissingHeader)
        );
    }

    #[test]
    fn test_parse_bearer_rejects_other_forms() {
        for raw in [
            "abc.def.ghi",
            "Basic dXNlcjpwYXNz",
            "bearer abc.def.ghi",
            "Bearer",
            "Bearer ",
            "Bearer  abc",
            "Bearer abc def",
            "Token abc",
        ] {
            assert_eq!(
                parse_bearer(Some(&header(raw))),
                Err(GuardRejection::MalformedHeader),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_bearer_rejects_non_utf8() {
        let value = HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap();
        assert_eq!(
            parse_bearer(Some(&value)),
            Err(GuardRejection::MalformedHeader)
        );
    }

    #[test]
    fn test_identity_from_claims() {
        let user_id = UserId::new();
        let now = chrono::Utc::now();
        let ttl = chrono::Duration::hours(1);

        let claims = auth::Claims::new(user_id, "admin", now, ttl);
        assert_eq!(
            identity_from_claims(&claims),
            Some(Identity::new(user_id, Role::Admin))
        );

        let claims = auth::Claims::new("not-a-uuid", "admin", now, ttl);
        assert_eq!(identity_from_claims(&claims), None);

        let claims = auth::Claims::new(user_id, "superuser", now, ttl);
        assert_eq!(identity_from_claims(&claims), None);
    }

    #[test]
    fn test_rejection_statuses() {
        assert_eq!(GuardRejection::MissingHeader.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(GuardRejection::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(GuardRejection::InsufficientRole.status(), StatusCode::FORBIDDEN);
    }
}
