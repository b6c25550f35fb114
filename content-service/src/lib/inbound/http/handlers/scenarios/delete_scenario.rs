use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_scenario_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Delete a scenario and its words.
pub async fn delete_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let scenario_id = parse_scenario_id(&scenario_id)?;

    state
        .content_service
        .delete_scenario(&scenario_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
