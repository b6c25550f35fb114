pub mod create_scenario;
pub mod delete_scenario;
pub mod get_scenario;
pub mod update_scenario;

pub use create_scenario::create_scenario;
pub use delete_scenario::delete_scenario;
pub use get_scenario::get_scenario;
pub use update_scenario::update_scenario;

use crate::domain::content::models::ScenarioId;
use crate::inbound::http::handlers::ApiError;

fn parse_scenario_id(raw: &str) -> Result<ScenarioId, ApiError> {
    ScenarioId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
