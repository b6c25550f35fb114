use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_scenario_id;
use crate::domain::patch::PatchMap;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::ScenarioData;
use crate::inbound::http::router::AppState;

pub async fn update_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
    JsonBody(patch): JsonBody<PatchMap>,
) -> Result<ApiSuccess<ScenarioData>, ApiError> {
    let scenario_id = parse_scenario_id(&scenario_id)?;

    state
        .content_service
        .update_scenario(&scenario_id, &patch)
        .await
        .map_err(ApiError::from)
        .map(|ref scenario| ApiSuccess::new(StatusCode::OK, scenario.into()))
}
