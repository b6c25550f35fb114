use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_word_id;
use crate::domain::patch::PatchMap;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::WordData;
use crate::inbound::http::router::AppState;

pub async fn update_word(
    State(state): State<AppState>,
    Path(word_id): Path<String>,
    JsonBody(patch): JsonBody<PatchMap>,
) -> Result<ApiSuccess<WordData>, ApiError> {
    let word_id = parse_word_id(&word_id)?;

    state
        .content_service
        .update_word(&word_id, &patch)
        .await
        .map_err(ApiError::from)
        .map(|ref word| ApiSuccess::new(StatusCode::OK, word.into()))
}
