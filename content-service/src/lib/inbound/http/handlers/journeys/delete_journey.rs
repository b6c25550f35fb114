use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_journey_id;
use super::require_owner;
use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Delete a journey the caller created, along with its scenarios and words.
pub async fn delete_journey(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(journey_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let journey_id = parse_journey_id(&journey_id)?;
    require_owner(&state, &identity, journey_id, "delete").await?;

    state
        .content_service
        .delete_journey(&journey_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
