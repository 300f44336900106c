use crate::api::access::error::AccessError;
use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

fn log_error(error: &FavoritesError) {
    match error {
        FavoritesError::Database(e) => warn!("Database query failed: {}", e),
        FavoritesError::Internal(e) => warn!("Internal error: {:?}", e),
        FavoritesError::NotFound(message) => warn!("Favorite -> not found: {}", message),
        FavoritesError::Forbidden(message) => warn!("Favorite -> forbidden: {}", message),
    }
}

impl IntoResponse for FavoritesError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, format!("Not found: {message}")),
            Self::Forbidden(message) => (StatusCode::FORBIDDEN, format!("Forbidden: {message}")),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for FavoritesError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sql_err) | DbError::UniqueViolation(sql_err) => {
                if matches!(sql_err, sqlx::Error::RowNotFound) {
                    Self::NotFound("row not found".into())
                } else {
                    Self::Database(sql_err)
                }
            }
            DbError::SerdeJson(err) => Self::Internal(eyre::Report::new(err)),
        }
    }
}

impl From<AccessError> for FavoritesError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Database(e) => Self::Database(e),
            AccessError::Internal(e) => Self::Internal(e),
            AccessError::AlbumNotFound(id) => Self::NotFound(format!("album {id}")),
            AccessError::PhotoNotFound(id) => Self::NotFound(format!("photo {id}")),
            AccessError::CommentNotFound(id) => Self::NotFound(format!("comment {id}")),
            AccessError::Forbidden(message) => Self::Forbidden(message.to_string()),
        }
    }
}
