use anyhow::Context as _;
use axum::{Json, extract::State, response::Html};
use std::sync::Arc;

use stardex_core::SearchStats;

use crate::AppState;
use crate::api_error::ApiError;
use crate::views;

pub async fn stats_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let stats = state.analytics_service.stats().await?;
    let html = views::render_stats(&stats).context("render stats page")?;
    Ok(Html(html))
}

pub async fn stats_json(State(state): State<Arc<AppState>>) -> Result<Json<SearchStats>, ApiError> {
    Ok(Json(state.analytics_service.stats().await?))
}
