use crate::database::DbError;
use color_eyre::eyre;
use thiserror::Error;

/// Failures while resolving what a user may do with a resource.
///
/// Missing resources are reported as such, never as a permission
/// problem, so callers can keep 404 and 403 apart.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("internal error")]
    Internal(eyre::Report),

    #[error("Album {0} not found")]
    AlbumNotFound(i64),

    #[error("Photo {0} not found")]
    PhotoNotFound(i64),

    #[error("Comment {0} not found")]
    CommentNotFound(i64),

    #[error("Forbidden: {0}")]
    Forbidden(&'static str),
}

impl From<DbError> for AccessError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(e) | DbError::UniqueViolation(e) => Self::Database(e),
            DbError::SerdeJson(e) => Self::Internal(eyre::Report::new(e)),
        }
    }
}
