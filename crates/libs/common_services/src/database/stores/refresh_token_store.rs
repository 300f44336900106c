use crate::database::DbError;
use crate::database::refresh_token::RefreshToken;
use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

pub struct RefreshTokenStore;

impl RefreshTokenStore {
    pub async fn insert(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        selector: &str,
        verifier_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO refresh_token (user_id, selector, verifier_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(selector)
        .bind(verifier_hash)
        .bind(expires_at)
        .bind(Utc::now())
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn find_by_selector(
        conn: impl Executor<'_, Database = Sqlite>,
        selector: &str,
    ) -> Result<Option<RefreshToken>, DbError> {
        let token = sqlx::query_as::<_, RefreshToken>(
            "SELECT id, user_id, selector, verifier_hash, expires_at
             FROM refresh_token WHERE selector = ?",
        )
        .bind(selector)
        .fetch_optional(conn)
        .await?;
        Ok(token)
    }

    pub async fn delete_by_selector(
        conn: impl Executor<'_, Database = Sqlite>,
        selector: &str,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM refresh_token WHERE selector = ?")
            .bind(selector)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Drop every session for a user, used when token theft is suspected.
    pub async fn delete_all_for_user(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM refresh_token WHERE user_id = ?")
            .bind(user_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
