use crate::database::DbError;
use crate::database::album::SharedAlbum;
use crate::database::share::{Share, SharePermission, ShareWithUser};
use chrono::Utc;
use sqlx::{Executor, Sqlite};

pub struct ShareStore;

impl ShareStore {
    pub async fn find(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        user_id: i64,
    ) -> Result<Option<Share>, DbError> {
        let share = sqlx::query_as::<_, Share>(
            "SELECT id, album_id, user_id, permission, created_at
             FROM share WHERE album_id = ? AND user_id = ?",
        )
        .bind(album_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?;
        Ok(share)
    }

    /// Grant or overwrite a user's permission on an album.
    pub async fn upsert(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        user_id: i64,
        permission: SharePermission,
    ) -> Result<Share, DbError> {
        let share = sqlx::query_as::<_, Share>(
            "INSERT INTO share (album_id, user_id, permission, created_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT (album_id, user_id) DO UPDATE SET permission = excluded.permission
             RETURNING id, album_id, user_id, permission, created_at",
        )
        .bind(album_id)
        .bind(user_id)
        .bind(permission)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;
        Ok(share)
    }

    pub async fn delete(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
        user_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM share WHERE album_id = ? AND user_id = ?")
            .bind(album_id)
            .bind(user_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_for_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<Vec<ShareWithUser>, DbError> {
        let shares = sqlx::query_as::<_, ShareWithUser>(
            "SELECT s.id, s.album_id, s.user_id, s.permission, s.created_at, u.name, u.email
             FROM share s
             JOIN app_user u ON u.id = s.user_id
             WHERE s.album_id = ?
             ORDER BY s.created_at DESC",
        )
        .bind(album_id)
        .fetch_all(conn)
        .await?;
        Ok(shares)
    }

    /// Albums other people shared with this user, newest grant first.
    pub async fn list_shared_with_user(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<Vec<SharedAlbum>, DbError> {
        let albums = sqlx::query_as::<_, SharedAlbum>(
            "SELECT a.id, a.owner_id, a.title, a.description, a.tags, a.is_public,
                    a.created_at, a.updated_at, u.name AS owner_name,
                    s.permission, COUNT(p.id) AS photo_count
             FROM share s
             JOIN album a ON a.id = s.album_id
             JOIN app_user u ON u.id = a.owner_id
             LEFT JOIN photo p ON p.album_id = a.id
             WHERE s.user_id = ?
             GROUP BY a.id
             ORDER BY s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(conn)
        .await?;
        Ok(albums)
    }

    pub async fn delete_by_album(
        conn: impl Executor<'_, Database = Sqlite>,
        album_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM share WHERE album_id = ?")
            .bind(album_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
