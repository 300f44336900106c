use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;

/// Represents a user's favorite mark on a photo.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub photo_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Favorited photo with album and uploader context plus comment count.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePhoto {
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
    pub comment_count: i64,
    pub favorited_at: DateTime<Utc>,
}

/// Album row with how many of the user's favorites it holds.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumFavoriteCount {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorite_count: i64,
}
