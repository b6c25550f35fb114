pub mod create_word;
pub mod delete_word;
pub mod get_word;
pub mod update_word;

pub use create_word::create_word;
pub use delete_word::delete_word;
pub use get_word::get_word;
pub use update_word::update_word;

use crate::domain::content::models::WordId;
use crate::inbound::http::handlers::ApiError;

fn parse_word_id(raw: &str) -> Result<WordId, ApiError> {
    WordId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
