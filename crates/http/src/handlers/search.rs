use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use stardex_core::SearchResult;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    Ok(Json(state.search_service.search(&query).await?))
}
