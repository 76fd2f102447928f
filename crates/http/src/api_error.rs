//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stardex_service::ServiceError;

/// Message returned when a backing store cannot be reached.
pub const DATA_SOURCE_UNAVAILABLE_MESSAGE: &str =
    "This page could look nicer, unfortunately the error is the same: database not available.";

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
/// `Internal` logs the real error server-side and returns a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable: item store, search index or counter store down.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let transient = err.is_transient();
        match err {
            ServiceError::InvalidPage(msg) => Self::BadRequest(format!("invalid page: {msg}")),
            ServiceError::InvalidQuery(msg) => Self::BadRequest(format!("invalid query: {msg}")),
            ServiceError::DataSourceUnavailable(e) => {
                tracing::error!(error = %e, transient, "data source unavailable");
                Self::ServiceUnavailable(DATA_SOURCE_UNAVAILABLE_MESSAGE.to_owned())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardex_storage::StorageError;

    async fn split(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let err = ApiError::from(anyhow::Error::from(std::fmt::Error).context("render catalog page"));
        let (status, body) = split(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn invalid_page_is_bad_request() {
        let (status, body) = split(ServiceError::InvalidPage("abc".to_owned()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid page: abc");
    }

    #[tokio::test]
    async fn unavailable_source_uses_fixed_message() {
        let err = ServiceError::DataSourceUnavailable(StorageError::SearchStatus {
            code: 503,
            body: "down".to_owned(),
        });
        assert!(err.is_transient());
        let (status, body) = split(err.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], DATA_SOURCE_UNAVAILABLE_MESSAGE);
    }
}
