use anyhow::Context as _;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use stardex_core::{Item, Page};

use crate::AppState;
use crate::api_error::ApiError;
use crate::views;

pub async fn first_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let page = state.catalog_service.page(1).await?;
    let html = views::render_catalog(&page).context("render catalog page")?;
    Ok(Html(html))
}

pub async fn numbered_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Html<String>, ApiError> {
    let page = state.catalog_service.page_from_path(&page).await?;
    let html = views::render_catalog(&page).context("render catalog page")?;
    Ok(Html(html))
}

pub async fn first_page_json(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Page<Item>>, ApiError> {
    Ok(Json(state.catalog_service.page(1).await?))
}

pub async fn numbered_page_json(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Json<Page<Item>>, ApiError> {
    Ok(Json(state.catalog_service.page_from_path(&page).await?))
}
