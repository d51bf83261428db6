//! Word lookup and submission endpoints, relayed to the word API

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::models::{MessageResponse, WordLookupResult, WordQuery};
use crate::services::word_api::WordApiError;
use crate::AppState;

pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch word definition";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add words";
pub const WORDS_ADDED_MESSAGE: &str = "Words added successfully!";

/// GET /api/words?word=
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Json<WordLookupResult>> {
    match state.word_api.lookup(&query.word).await {
        Ok(result) => Ok(Json(result)),
        Err(WordApiError::NotFound { word }) => {
            tracing::info!("Word not included: {}", word);
            Err(ApiError::WordNotIncluded)
        }
        Err(e) => {
            tracing::warn!("Word lookup failed: {}", e);
            Err(ApiError::Upstream(LOOKUP_FAILED_MESSAGE.to_string()))
        }
    }
}

/// POST /api/words
/// Body must be a JSON array; its elements are forwarded untouched
pub async fn add(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Vec<Value>>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(words) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    state.word_api.add_words(&words).await.map_err(|e| {
        tracing::warn!("Adding {} words failed: {}", words.len(), e);
        ApiError::Upstream(ADD_FAILED_MESSAGE.to_string())
    })?;

    tracing::info!("Added {} words", words.len());

    Ok(Json(MessageResponse {
        message: WORDS_ADDED_MESSAGE.to_string(),
    }))
}
