use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::content::models::CreateScenarioCommand;
use crate::domain::content::models::JourneyId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::ScenarioData;
use crate::inbound::http::router::AppState;

pub async fn create_scenario(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateScenarioRequest>,
) -> Result<ApiSuccess<ScenarioData>, ApiError> {
    state
        .content_service
        .create_scenario(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref scenario| ApiSuccess::new(StatusCode::CREATED, scenario.into()))
}

/// HTTP request body for creating a scenario (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateScenarioRequest {
    journey_id: String,
    title: String,
    description: String,
    display_order: i32,
}

impl CreateScenarioRequest {
    fn try_into_command(self) -> Result<CreateScenarioCommand, ApiError> {
        if self.journey_id.trim().is_empty() {
            return Err(ApiError::BadRequest("journey ID is required".to_string()));
        }
        let journey_id = JourneyId::from_string(&self.journey_id)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        CreateScenarioCommand::new(journey_id, self.title, self.description, self.display_order)
            .map_err(ApiError::from)
    }
}
