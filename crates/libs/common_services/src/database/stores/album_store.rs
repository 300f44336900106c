use crate::database::DbError;
use crate::database::album::{Album, AlbumOwnership, AlbumWithCount, AlbumWithOwner};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Executor, Sqlite};

pub struct AlbumStore;

impl AlbumStore {
    pub async fn create(
        conn: impl Executor<'_, Database = Sqlite>,
        owner_id: i64,
        title: &str,
        description: Option<&str>,
        tags: Json<Vec<String>>,
        is_public: bool,
    ) -> Result<Album, DbError> {
        let now = Utc::now();
        let album = sqlx::query_as::<_, Album>(
            "INSERT INTO album (owner_id, title, description, tags, is_public, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id, owner_id, title, description, tags, is_public, created_at, updated_at",
        )
        .bind(owner_id)
        .bind(title)
        .bind(description)
        .bind(tags)
        .bind(is_public)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await?;
        Ok(album)
    }

    /// Update an album, applying only the fields that are `Some`.
    pub async fn update(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        title: Option<&str>,
        description: Option<&str>,
        tags: Option<Json<Vec<String>>>,
        is_public: Option<bool>,
    ) -> Result<Album, DbError> {
        let album = sqlx::query_as::<_, Album>(
            "UPDATE album
             SET title = COALESCE(?, title),
                 description = COALESCE(?, description),
                 tags = COALESCE(?, tags),
                 is_public = COALESCE(?, is_public),
                 updated_at = ?
             WHERE id = ?
             RETURNING id, owner_id, title, description, tags, is_public, created_at, updated_at",
        )
        .bind(title)
        .bind(description)
        .bind(tags)
        .bind(is_public)
        .bind(Utc::now())
        .bind(album_id)
        .fetch_one(conn)
        .await?;
        Ok(album)
    }

    pub async fn find_by_id(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Option<Album>, DbError> {
        let album = sqlx::query_as::<_, Album>(
            "SELECT id, owner_id, title, description, tags, is_public, created_at, updated_at
             FROM album WHERE id = ?",
        )
        .bind(album_id)
        .fetch_optional(conn)
        .await?;
        Ok(album)
    }

    /// The minimal row the access resolver needs: owner and visibility.
    pub async fn find_ownership(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Option<AlbumOwnership>, DbError> {
        let ownership = sqlx::query_as::<_, AlbumOwnership>(
            "SELECT id, owner_id, is_public FROM album WHERE id = ?",
        )
        .bind(album_id)
        .fetch_optional(conn)
        .await?;
        Ok(ownership)
    }

    pub async fn find_with_owner(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Option<AlbumWithOwner>, DbError> {
        let album = sqlx::query_as::<_, AlbumWithOwner>(
            "SELECT a.id, a.owner_id, a.title, a.description, a.tags, a.is_public,
                    a.created_at, a.updated_at, u.name AS owner_name
             FROM album a
             JOIN app_user u ON u.id = a.owner_id
             WHERE a.id = ?",
        )
        .bind(album_id)
        .fetch_optional(conn)
        .await?;
        Ok(album)
    }

    pub async fn list_by_owner(
        conn: impl Executor<'_, Database = Sqlite>,
        owner_id: i64,
    ) -> Result<Vec<AlbumWithCount>, DbError> {
        let albums = sqlx::query_as::<_, AlbumWithCount>(
            "SELECT a.id, a.owner_id, a.title, a.description, a.tags, a.is_public,
                    a.created_at, a.updated_at, COUNT(p.id) AS photo_count
             FROM album a
             LEFT JOIN photo p ON p.album_id = a.id
             WHERE a.owner_id = ?
             GROUP BY a.id
             ORDER BY a.updated_at DESC",
        )
        .bind(owner_id)
        .fetch_all(conn)
        .await?;
        Ok(albums)
    }

    pub async fn delete(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM album WHERE id = ?")
            .bind(album_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
