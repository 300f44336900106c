use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;

/// Represents a photo stored in an album.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub uploaded_by: i64,
    pub filename: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub date_taken: DateTime<Utc>,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
}

/// Photo row joined with the uploader's display name and comment count,
/// the shape the album view renders.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoWithUploader {
    pub id: i64,
    pub album_id: i64,
    pub uploaded_by: i64,
    pub filename: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub date_taken: DateTime<Utc>,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
    pub uploader_name: String,
    pub comment_count: i64,
}

/// Photo row with album and uploader context, for cross-album listings.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoWithContext {
    pub id: i64,
    pub album_id: i64,
    pub uploaded_by: i64,
    pub filename: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub date_taken: DateTime<Utc>,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
    pub album_title: String,
    pub uploader_name: String,
}

/// The photo columns the access resolver cares about.
#[derive(Debug, FromRow, Clone, Copy)]
pub struct PhotoOrigin {
    pub id: i64,
    pub album_id: i64,
    pub uploaded_by: i64,
}
