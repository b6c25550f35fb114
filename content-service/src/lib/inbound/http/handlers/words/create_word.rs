use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::content::models::CreateWordCommand;
use crate::domain::content::models::GenerationMethod;
use crate::domain::content::models::ScenarioId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::WordData;
use crate::inbound::http::router::AppState;

pub async fn create_word(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateWordRequest>,
) -> Result<ApiSuccess<WordData>, ApiError> {
    state
        .content_service
        .create_word(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref word| ApiSuccess::new(StatusCode::CREATED, word.into()))
}

/// HTTP request body for creating a word (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateWordRequest {
    scenario_id: String,
    target_text: String,
    source_text: String,
    display_order: i32,
    image_url: Option<String>,
    audio_url: Option<String>,
    generation_method: Option<String>,
}

impl CreateWordRequest {
    /// An absent or blank generation method means `manual`.
    fn try_into_command(self) -> Result<CreateWordCommand, ApiError> {
        if self.scenario_id.trim().is_empty() {
            return Err(ApiError::BadRequest("scenario ID is required".to_string()));
        }
        let scenario_id = ScenarioId::from_string(&self.scenario_id)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let generation_method = match self.generation_method.as_deref().map(str::trim) {
            None | Some("") => GenerationMethod::default(),
            Some(method) => method
                .parse::<GenerationMethod>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        };

        CreateWordCommand::new(
            scenario_id,
            self.target_text,
            self.source_text,
            self.display_order,
            self.image_url,
            self.audio_url,
            generation_method,
        )
        .map_err(ApiError::from)
    }
}
