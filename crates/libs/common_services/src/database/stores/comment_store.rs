use crate::database::DbError;
use crate::database::comment::{Comment, CommentWithAuthor};
use chrono::Utc;
use sqlx::{Executor, Sqlite};

pub struct CommentStore;

impl CommentStore {
    pub async fn create(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment, DbError> {
        let now = Utc::now();
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comment (photo_id, user_id, content, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, photo_id, user_id, content, created_at, updated_at",
        )
        .bind(photo_id)
        .bind(user_id)
        .bind(content)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await?;
        Ok(comment)
    }

    pub async fn find_by_id(
        conn: impl Executor<'_, Database = Sqlite>,
        comment_id: i64,
    ) -> Result<Option<Comment>, DbError> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, photo_id, user_id, content, created_at, updated_at
             FROM comment WHERE id = ?",
        )
        .bind(comment_id)
        .fetch_optional(conn)
        .await?;
        Ok(comment)
    }

    /// Oldest first, the order a conversation reads in.
    pub async fn list_by_photo(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
    ) -> Result<Vec<CommentWithAuthor>, DbError> {
        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.photo_id, c.user_id, c.content, c.created_at, c.updated_at,
                    u.name AS author_name
             FROM comment c
             JOIN app_user u ON u.id = c.user_id
             WHERE c.photo_id = ?
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(photo_id)
        .fetch_all(conn)
        .await?;
        Ok(comments)
    }

    pub async fn update(
        conn: impl Executor<'_, Database = Sqlite>,
        comment_id: i64,
        content: &str,
    ) -> Result<Comment, DbError> {
        let comment = sqlx::query_as::<_, Comment>(
            "UPDATE comment SET content = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, photo_id, user_id, content, created_at, updated_at",
        )
        .bind(content)
        .bind(Utc::now())
        .bind(comment_id)
        .fetch_one(conn)
        .await?;
        Ok(comment)
    }

    pub async fn delete(
        conn: impl Executor<'_, Database = Sqlite>,
        comment_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM comment WHERE id = ?")
            .bind(comment_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_photo(
        conn: impl Executor<'_, Database = Sqlite>,
        photo_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM comment WHERE photo_id = ?")
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
            "DELETE FROM comment
             WHERE photo_id IN (SELECT id FROM photo WHERE album_id = ?)",
        )
        .bind(album_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
