use crate::api_state::ApiContext;
use axum::extract::State;
use axum::{Extension, Json};
use common_services::api::stats::error::StatsError;
use common_services::api::stats::interfaces::UserStatsResponse;
use common_services::api::stats::service::user_stats;
use common_services::database::app_user::User;

/// Usage totals for the caller: albums, photos, favorites and storage.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "The caller's usage statistics.", body = UserStatsResponse),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_stats_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<UserStatsResponse>, StatsError> {
    let stats = user_stats(&context.pool, user.id).await?;
    Ok(Json(stats))
}
