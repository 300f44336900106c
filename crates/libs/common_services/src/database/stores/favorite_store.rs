use crate::database::DbError;
use crate::database::favorite::{AlbumFavoriteCount, Favorite, FavoritePhoto};
use chrono::Utc;
use sqlx::{Executor, Sqlite};

pub struct FavoriteStore;

impl FavoriteStore {
    pub async fn find(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        photo_id: i64,
    ) -> Result<Option<Favorite>, DbError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, photo_id, created_at
             FROM favorite WHERE user_id = ? AND photo_id = ?",
        )
        .bind(user_id)
        .bind(photo_id)
        .fetch_optional(conn)
        .await?;
        Ok(favorite)
    }

    pub async fn insert(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        photo_id: i64,
    ) -> Result<Favorite, DbError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorite (user_id, photo_id, created_at)
             VALUES (?, ?, ?)
             RETURNING id, user_id, photo_id, created_at",
        )
        .bind(user_id)
        .bind(photo_id)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;
        Ok(favorite)
    }

    pub async fn delete(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        photo_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM favorite WHERE user_id = ? AND photo_id = ?")
            .bind(user_id)
            .bind(photo_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count_by_user(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorite WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }

    /// The user's favorites, newest mark first, with listing context.
    pub async fn list_by_user(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FavoritePhoto>, DbError> {
        let photos = sqlx::query_as::<_, FavoritePhoto>(
            "SELECT p.id, p.album_id, p.uploaded_by, p.filename, p.description, p.tags,
                    p.date_taken, p.file_size, p.created_at,
                    a.title AS album_title, u.name AS uploader_name,
                    (SELECT COUNT(*) FROM comment c WHERE c.photo_id = p.id) AS comment_count,
                    f.created_at AS favorited_at
             FROM favorite f
             JOIN photo p ON p.id = f.photo_id
             JOIN album a ON a.id = p.album_id
             JOIN app_user u ON u.id = p.uploaded_by
             WHERE f.user_id = ?
             ORDER BY f.created_at DESC, f.id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;
        Ok(photos)
    }

    /// Albums holding the user's favorites, most favorited first.
    pub async fn list_albums(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<Vec<AlbumFavoriteCount>, DbError> {
        let albums = sqlx::query_as::<_, AlbumFavoriteCount>(
            "SELECT a.id, a.owner_id, a.title, a.description, a.tags, a.is_public,
                    a.created_at, a.updated_at, COUNT(f.id) AS favorite_count
             FROM favorite f
             JOIN photo p ON p.id = f.photo_id
             JOIN album a ON a.id = p.album_id
             WHERE f.user_id = ?
             GROUP BY a.id
             ORDER BY favorite_count DESC",
        )
        .bind(user_id)
        .fetch_all(conn)
        .await?;
        Ok(albums)
    }

    pub async fn delete_by_photo(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM favorite WHERE photo_id = ?")
            .bind(photo_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "DELETE FROM favorite
             WHERE photo_id IN (SELECT id FROM photo WHERE album_id = ?)",
        )
        .bind(album_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
