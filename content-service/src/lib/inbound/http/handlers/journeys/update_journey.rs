use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_journey_id;
use super::require_owner;
use crate::domain::patch::PatchMap;
use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JourneyData;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

/// Apply a partial update to a journey the caller created.
///
/// The body is only inspected once existence and ownership are settled.
pub async fn update_journey(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(journey_id): Path<String>,
    body: Result<JsonBody<PatchMap>, ApiError>,
) -> Result<ApiSuccess<JourneyData>, ApiError> {
    let journey_id = parse_journey_id(&journey_id)?;
    require_owner(&state, &identity, journey_id, "update").await?;
    let JsonBody(patch) = body?;

    state
        .content_service
        .update_journey(&journey_id, &patch)
        .await
        .map_err(ApiError::from)
        .map(|ref journey| ApiSuccess::new(StatusCode::OK, journey.into()))
}
