use crate::database::DbError;
use crate::database::app_user::{User, UserWithPassword};
use chrono::Utc;
use sqlx::{Executor, Sqlite};

pub struct UserStore;

impl UserStore {
    /// Insert a new user, returning the stored row without the hash.
    pub async fn create(
        conn: impl Executor<'_, Database = Sqlite>,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User, DbError> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO app_user (email, name, password, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, email, name, created_at, updated_at",
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await?;
        Ok(user)
    }

    /// Update a user, applying only the fields that are `Some`.
    pub async fn update(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE app_user
             SET name = COALESCE(?, name),
                 email = COALESCE(?, email),
                 password = COALESCE(?, password),
                 updated_at = ?
             WHERE id = ?
             RETURNING id, email, name, created_at, updated_at",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_one(conn)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at, updated_at FROM app_user WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }

    pub async fn find_by_email(
        conn: impl Executor<'_, Database = Sqlite>,
        email: &str,
    ) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at, updated_at FROM app_user WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }

    /// Fetch a user including the password hash, for credential checks.
    pub async fn find_by_email_with_password(
        conn: impl Executor<'_, Database = Sqlite>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, name, password, created_at, updated_at
             FROM app_user WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id_with_password(
        conn: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<Option<UserWithPassword>, DbError> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, name, password, created_at, updated_at
             FROM app_user WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }
}
