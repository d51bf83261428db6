//! Q&A content endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{QaDetailResponse, QaListResponse};
use crate::services::content;
use crate::AppState;

/// GET /api/qa
/// Lists every Q&A item; an absent content directory lists nothing
pub async fn list(State(state): State<AppState>) -> Result<Json<QaListResponse>> {
    let items = content::load_items(&state.qa_dir)?;
    Ok(Json(QaListResponse { items }))
}

/// GET /api/qa/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QaDetailResponse>> {
    let item = content::find_item(&state.qa_dir, &id)?
        .ok_or_else(|| ApiError::NotFound(format!("Q&A item {}", id)))?;

    Ok(Json(QaDetailResponse::from_item(item)))
}
