//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(#[from] folio_content::ValidationError),

    #[error("Auth error: {0}")]
    Auth(#[from] folio_auth::AuthError),

    #[error("Store error: {0}")]
    Store(#[from] folio_store::StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            // Validation runs behind auth (or on the public contact form),
            // so a specific message is safe and actionable.
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Auth(e) => match e {
                folio_auth::AuthError::MissingFields => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                folio_auth::AuthError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, e.to_string())
                }
                folio_auth::AuthError::TokenGeneration(_)
                | folio_auth::AuthError::Store(_) => {
                    error!("Auth backend failure: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            ApiError::Store(e) => {
                // Connectivity details stay in the server log.
                error!("Store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = axum::Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
