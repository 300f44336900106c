use crate::api::stats::error::StatsError;
use crate::api::stats::interfaces::UserStatsResponse;
use crate::database::stats_store::StatsStore;
use sqlx::SqlitePool;

pub async fn user_stats(pool: &SqlitePool, user_id: i64) -> Result<UserStatsResponse, StatsError> {
    let album_count = StatsStore::album_count(pool, user_id).await?;
    let photo_count = StatsStore::photo_count(pool, user_id).await?;
    let favorite_count = StatsStore::favorite_count(pool, user_id).await?;
    let storage_bytes = StatsStore::storage_bytes(pool, user_id).await?;

    Ok(UserStatsResponse {
        album_count,
        photo_count,
        favorite_count,
        storage_bytes,
        storage_used: format_bytes(storage_bytes),
    })
}

/// Render a byte count as a human string, stepping B through TB.
pub fn format_bytes(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
