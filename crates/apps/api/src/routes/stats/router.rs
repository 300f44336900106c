use crate::api_state::ApiContext;
use crate::stats::handlers::get_stats_handler;
use axum::Router;
use axum::routing::get;

pub fn stats_protected_router() -> Router<ApiContext> {
    Router::new().route("/stats", get(get_stats_handler))
}
