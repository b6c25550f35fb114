pub mod auth;
pub mod health;
pub mod journeys;
pub mod scenarios;
pub mod words;

// Re-export handlers for easy access
pub use auth::login;
pub use auth::me;
pub use auth::register;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
pub use health::health;
pub use journeys::create_journey;
pub use journeys::delete_journey;
pub use journeys::get_journey;
pub use journeys::list_journeys;
pub use journeys::update_journey;
pub use scenarios::create_scenario;
pub use scenarios::delete_scenario;
pub use scenarios::get_scenario;
pub use scenarios::update_scenario;
use serde::Serialize;
use thiserror::Error;
pub use words::create_word;
pub use words::delete_word;
pub use words::get_word;
pub use words::update_word;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Journey;
use crate::domain::content::models::Scenario;
use crate::domain::content::models::Word;
use crate::domain::ownership::errors::OwnershipError;
use crate::domain::ownership::models::ResourceRef;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

/// Standardized API success response.
///
/// The payload is written as the bare response body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    /// Log the underlying failure and hide it from the client.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "Request failed");
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest("Invalid request body".to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::WeakPassword(_)
            | UserError::InvalidRole(_)
            | UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Password(_)
            | UserError::Token(_)
            | UserError::Timeout(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::internal(err),
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::InvalidId(_)
            | ContentError::InvalidValue(_)
            | ContentError::MissingField(_)
            | ContentError::Patch(_) => ApiError::BadRequest(err.to_string()),
            ContentError::JourneyNotFound(_)
            | ContentError::ScenarioNotFound(_)
            | ContentError::WordNotFound(_) => ApiError::NotFound(err.to_string()),
            ContentError::Timeout(_) | ContentError::DatabaseError(_) => {
                ApiError::internal(err)
            }
        }
    }
}

impl From<OwnershipError> for ApiError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::NotFound { missing, .. } => {
                let message = match missing {
                    ResourceRef::Journey(_) => "Journey not found",
                    ResourceRef::Scenario(_) => "Scenario not found",
                    ResourceRef::Word(_) => "Word not found",
                };
                ApiError::NotFound(message.to_string())
            }
            OwnershipError::Timeout(_) | OwnershipError::Repository(_) => ApiError::internal(err),
        }
    }
}

/// JSON body extractor whose rejection uses the API error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub role: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
            display_name: user.display_name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source_language: String,
    pub target_language: String,
    pub status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Journey> for JourneyData {
    fn from(journey: &Journey) -> Self {
        Self {
            id: journey.id.to_string(),
            title: journey.title.clone(),
            description: journey.description.clone(),
            source_language: journey.source_language.clone(),
            target_language: journey.target_language.clone(),
            status: journey.status.as_str().to_string(),
            created_by: journey.created_by.to_string(),
            created_at: journey.created_at,
            updated_at: journey.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioData {
    pub id: String,
    pub journey_id: String,
    pub title: String,
    pub description: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Scenario> for ScenarioData {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.to_string(),
            journey_id: scenario.journey_id.to_string(),
            title: scenario.title.clone(),
            description: scenario.description.clone(),
            display_order: scenario.display_order,
            created_at: scenario.created_at,
            updated_at: scenario.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordData {
    pub id: String,
    pub scenario_id: String,
    pub target_text: String,
    pub source_text: String,
    pub display_order: i32,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub generation_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Word> for WordData {
    fn from(word: &Word) -> Self {
        Self {
            id: word.id.to_string(),
            scenario_id: word.scenario_id.to_string(),
            target_text: word.target_text.clone(),
            source_text: word.source_text.clone(),
            display_order: word.display_order,
            image_url: word.image_url.clone(),
            audio_url: word.audio_url.clone(),
            generation_method: word.generation_method.as_str().to_string(),
            created_at: word.created_at,
            updated_at: word.updated_at,
        }
    }
}
