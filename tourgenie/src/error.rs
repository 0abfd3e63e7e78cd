use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Search index error: {0}")]
    Index(String),

    #[error("Place lookup error: {0}")]
    Places(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API rate limit exceeded, retry after {retry_after:?} seconds")]
    ApiRateLimit { retry_after: Option<u64> },

    #[error("API authentication error: {0}")]
    ApiAuth(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM unavailable: {0}")]
    LlmUnavailable(String),

    #[error("LLM rate limit exceeded, retry after {retry_after:?} seconds")]
    LlmRateLimit { retry_after: Option<u64> },
}

impl IntoResponse for TourError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TourError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            TourError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TourError::Embedding(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            TourError::Index(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            TourError::Places(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            TourError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            TourError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            TourError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            TourError::ApiRateLimit { .. } => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            TourError::ApiAuth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            TourError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            TourError::Llm(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            TourError::LlmUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            TourError::LlmRateLimit { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                format!("LLM rate limit exceeded, retry after {retry_after:?} seconds"),
            ),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
