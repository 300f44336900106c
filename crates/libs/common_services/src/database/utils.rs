use app_state::constants;
use color_eyre::Result;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Open the SQLite pool and bring the schema up to date.
pub async fn get_db_pool(database_url: &str) -> Result<SqlitePool> {
    let db_path = database_url.strip_prefix("sqlite://").unwrap_or(database_url);
    if db_path != ":memory:" {
        if let Some(parent) = Path::new(db_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = &constants().database;
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(db.max_connections)
        .min_connections(db.min_connections)
        .max_lifetime(Duration::from_secs(db.max_lifetime))
        .idle_timeout(Duration::from_secs(db.idle_timeout))
        .acquire_timeout(Duration::from_secs(db.acquire_timeout))
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;
    info!("Database pool ready at {}", database_url);

    Ok(pool)
}

/// In-memory pool for tests. A single connection keeps every query on the
/// same database, otherwise each pooled connection would see its own
/// empty one.
#[cfg(test)]
pub async fn create_test_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
