pub mod create_journey;
pub mod delete_journey;
pub mod get_journey;
pub mod list_journeys;
pub mod update_journey;

pub use create_journey::create_journey;
pub use delete_journey::delete_journey;
pub use get_journey::get_journey;
pub use list_journeys::list_journeys;
pub use update_journey::update_journey;

use crate::domain::content::models::JourneyId;
use crate::domain::ownership::models::ResourceRef;
use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

fn parse_journey_id(raw: &str) -> Result<JourneyId, ApiError> {
    JourneyId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Admit only the creator of the journey.
///
/// A missing journey is reported as 404 before any ownership answer, so the
/// 403 never reveals which ids exist.
async fn require_owner(
    state: &AppState,
    identity: &Identity,
    journey_id: JourneyId,
    action: &'static str,
) -> Result<(), ApiError> {
    if state
        .ownership
        .owns(identity, ResourceRef::Journey(journey_id))
        .await?
    {
        return Ok(());
    }

    tracing::info!(
        user_id = %identity.user_id,
        journey_id = %journey_id,
        action,
        "Ownership check denied"
    );
    Err(ApiError::Forbidden(format!(
        "You don't have permission to {} this journey",
        action
    )))
}
