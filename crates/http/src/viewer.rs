//! Search page - embedded HTML/JS that queries `/api/search/{query}`.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the search page
pub const INDEX_HTML: &str = include_str!("index.html");

/// Serve the search page
pub async fn serve_index() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(INDEX_HTML))
        .into_response()
}
