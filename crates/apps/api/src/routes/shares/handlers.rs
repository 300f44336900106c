use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::shares::error::SharesError;
use common_services::api::shares::interfaces::CreateShareRequest;
use common_services::api::shares::service::{create_share, list_album_shares, revoke_share};
use common_services::database::app_user::User;
use common_services::database::share::{Share, ShareWithUser};

/// Grant another user access to an album, addressed by their email. Owner only.
///
/// Sharing with someone who already has a grant overwrites the permission level.
#[utoipa::path(
    post,
    path = "/albums/{album_id}/shares",
    tag = "Shares",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album to share.")
    ),
    request_body = CreateShareRequest,
    responses(
        (status = 201, description = "Share created or updated.", body = Share),
        (status = 403, description = "Only the owner can manage shares."),
        (status = 404, description = "Album not found."),
        (status = 409, description = "No account for that email, or sharing with yourself."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_share_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
    Json(payload): Json<CreateShareRequest>,
) -> Result<(StatusCode, Json<Share>), SharesError> {
    let share = create_share(&context.pool, user.id, album_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(share)))
}

/// List everyone an album is shared with. Owner only.
#[utoipa::path(
    get,
    path = "/albums/{album_id}/shares",
    tag = "Shares",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album.")
    ),
    responses(
        (status = 200, description = "The album's shares with grantee details.", body = Vec<ShareWithUser>),
        (status = 403, description = "Only the owner can manage shares."),
        (status = 404, description = "Album not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_album_shares_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<Json<Vec<ShareWithUser>>, SharesError> {
    let shares = list_album_shares(&context.pool, user.id, album_id).await?;
    Ok(Json(shares))
}

/// Revoke a user's access to an album. Owner only.
#[utoipa::path(
    delete,
    path = "/albums/{album_id}/shares/{user_id}",
    tag = "Shares",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album."),
        ("user_id" = i64, Path, description = "The grantee whose access is revoked.")
    ),
    responses(
        (status = 204, description = "Share revoked."),
        (status = 403, description = "Only the owner can manage shares."),
        (status = 404, description = "Album or share not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn revoke_share_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path((album_id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, SharesError> {
    revoke_share(&context.pool, user.id, album_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
