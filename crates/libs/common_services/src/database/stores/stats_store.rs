use crate::database::DbError;
use sqlx::{Executor, Sqlite};

pub struct StatsStore;

impl StatsStore {
    pub async fn album_count(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM album WHERE owner_id = ?")
            .bind(user_id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }

    /// Photos in the user's own albums, whoever uploaded them.
    pub async fn photo_count(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM photo p
             JOIN album a ON a.id = p.album_id
             WHERE a.owner_id = ?",
        )
        .bind(user_id)
        .fetch_one(conn)
        .await?;
        Ok(count)
    }

    /// Total bytes stored in the user's own albums.
    pub async fn storage_bytes(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        let bytes = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(p.file_size), 0) FROM photo p
             JOIN album a ON a.id = p.album_id
             WHERE a.owner_id = ?",
        )
        .bind(user_id)
        .fetch_one(conn)
        .await?;
        Ok(bytes)
    }

    pub async fn favorite_count(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorite WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }
}
