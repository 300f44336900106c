use crate::database::share::SharePermission;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;

/// Represents a photo album.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Album row joined with its photo count, for the owner's album overview.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithCount {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub photo_count: i64,
}

/// Album row joined with the owner's display name.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithOwner {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
}

/// Album shared with the current user, with the granted permission.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbum {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json<Vec<String>>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub permission: SharePermission,
    pub photo_count: i64,
}

/// The two album columns the access resolver cares about.
#[derive(Debug, FromRow, Clone, Copy)]
pub struct AlbumOwnership {
    pub id: i64,
    pub owner_id: i64,
    pub is_public: bool,
}
