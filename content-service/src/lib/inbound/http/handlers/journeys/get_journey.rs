use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::parse_journey_id;
use crate::domain::content::models::JourneyDetail;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JourneyData;
use crate::inbound::http::handlers::ScenarioData;
use crate::inbound::http::router::AppState;

pub async fn get_journey(
    State(state): State<AppState>,
    Path(journey_id): Path<String>,
) -> Result<ApiSuccess<JourneyDetailResponseData>, ApiError> {
    let journey_id = parse_journey_id(&journey_id)?;

    state
        .content_service
        .get_journey(&journey_id)
        .await
        .map_err(ApiError::from)
        .map(|ref detail| ApiSuccess::new(StatusCode::OK, detail.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDetailResponseData {
    #[serde(flatten)]
    pub journey: JourneyData,
    pub scenarios: Vec<ScenarioData>,
    pub scenario_count: usize,
    pub word_count: usize,
}

impl From<&JourneyDetail> for JourneyDetailResponseData {
    fn from(detail: &JourneyDetail) -> Self {
        Self {
            journey: (&detail.journey).into(),
            scenarios: detail.scenarios.iter().map(ScenarioData::from).collect(),
            scenario_count: detail.scenario_count(),
            word_count: detail.word_count,
        }
    }
}
