use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("User not found")]
    UserNotFound,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Current password is incorrect")]
    WrongPassword,

    #[error("Bad Request: {0}")]
    Validation(String),
}

fn log_error(error: &ProfileError) {
    match error {
        ProfileError::Database(e) => warn!("Database query failed: {}", e),
        ProfileError::Internal(e) => warn!("Internal error: {:?}", e),
        ProfileError::UserNotFound => warn!("Profile -> user from token not found"),
        ProfileError::EmailTaken => info!("Profile -> email already in use"),
        ProfileError::WrongPassword => info!("Profile -> wrong current password"),
        ProfileError::Validation(message) => info!("Profile -> validation failed: {}", message),
    }
}

impl IntoResponse for ProfileError {
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
            Self::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::EmailTaken => (
                StatusCode::CONFLICT,
                "This email is already used by another account".to_string(),
            ),
            Self::WrongPassword => (
                StatusCode::BAD_REQUEST,
                "Current password is incorrect".to_string(),
            ),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for ProfileError {
    fn from(err: DbError) -> Self {
        match err {
            // The only unique column on app_user is the email address.
            DbError::UniqueViolation(_) => Self::EmailTaken,
            DbError::Sqlx(sql_err) => {
                if matches!(sql_err, sqlx::Error::RowNotFound) {
                    Self::UserNotFound
                } else {
                    Self::Database(sql_err)
                }
            }
            DbError::SerdeJson(err) => Self::Internal(eyre::Report::new(err)),
        }
    }
}
