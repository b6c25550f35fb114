use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_word_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_word(
    State(state): State<AppState>,
    Path(word_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let word_id = parse_word_id(&word_id)?;

    state
        .content_service
        .delete_word(&word_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
