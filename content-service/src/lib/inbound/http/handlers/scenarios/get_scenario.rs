use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::parse_scenario_id;
use crate::domain::content::models::ScenarioDetail;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ScenarioData;
use crate::inbound::http::handlers::WordData;
use crate::inbound::http::router::AppState;

pub async fn get_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
) -> Result<ApiSuccess<ScenarioDetailResponseData>, ApiError> {
    let scenario_id = parse_scenario_id(&scenario_id)?;

    state
        .content_service
        .get_scenario(&scenario_id)
        .await
        .map_err(ApiError::from)
        .map(|ref detail| ApiSuccess::new(StatusCode::OK, detail.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioDetailResponseData {
    #[serde(flatten)]
    pub scenario: ScenarioData,
    pub words: Vec<WordData>,
}

impl From<&ScenarioDetail> for ScenarioDetailResponseData {
    fn from(detail: &ScenarioDetail) -> Self {
        Self {
            scenario: (&detail.scenario).into(),
            words: detail.words.iter().map(WordData::from).collect(),
        }
    }
}
