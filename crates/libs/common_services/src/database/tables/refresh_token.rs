use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored refresh token, split into a lookup selector and a hashed
/// verifier so the database never holds the full token.
#[derive(Debug, FromRow, Clone)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: i64,
    pub selector: String,
    pub verifier_hash: String,
    pub expires_at: DateTime<Utc>,
}
