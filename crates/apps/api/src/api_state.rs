use app_state::{AppSettings, StorageSettings};
use axum::extract::FromRef;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: SqlitePool,
    pub settings: AppSettings,
}

// These impls let extractors and middleware pull just the part of the
// state they need.
impl FromRef<ApiContext> for SqlitePool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for StorageSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.storage.clone()
    }
}
