use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::content::models::CreateJourneyCommand;
use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JourneyData;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

/// Create a draft journey owned by the caller.
pub async fn create_journey(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    JsonBody(body): JsonBody<CreateJourneyRequest>,
) -> Result<ApiSuccess<JourneyData>, ApiError> {
    let command = CreateJourneyCommand::new(
        body.title,
        body.description,
        body.source_language,
        body.target_language,
        identity.user_id,
    )?;

    state
        .content_service
        .create_journey(command)
        .await
        .map_err(ApiError::from)
        .map(|ref journey| ApiSuccess::new(StatusCode::CREATED, journey.into()))
}

/// HTTP request body for creating a journey (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateJourneyRequest {
    title: String,
    description: String,
    source_language: String,
    target_language: String,
}
