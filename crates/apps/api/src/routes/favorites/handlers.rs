use crate::api_state::ApiContext;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::favorites::error::FavoritesError;
use common_services::api::favorites::interfaces::{
    AddFavoriteResponse, FavoritePageParams, FavoriteStatusResponse, FavoritesPageResponse,
    ToggleFavoriteResponse,
};
use common_services::api::favorites::service::{
    add_favorite, favorite_status, list_favorites, list_favorites_by_album, remove_favorite,
    toggle_favorite,
};
use common_services::database::app_user::User;
use common_services::database::favorite::AlbumFavoriteCount;

/// Mark a photo as a favorite. Requires view access to its album.
#[utoipa::path(
    post,
    path = "/favorites/{photo_id}",
    tag = "Favorites",
    params(
        ("photo_id" = i64, Path, description = "The photo to mark.")
    ),
    responses(
        (status = 200, description = "The favorite, with a flag when it already existed.", body = AddFavoriteResponse),
        (status = 403, description = "No access to this photo's album."),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_favorite_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<Json<AddFavoriteResponse>, FavoritesError> {
    let response = add_favorite(&context.pool, user.id, photo_id).await?;
    Ok(Json(response))
}

/// Unmark a favorite. Works on the caller's own marks only, so access
/// revocation never traps stale favorites.
#[utoipa::path(
    delete,
    path = "/favorites/{photo_id}",
    tag = "Favorites",
    params(
        ("photo_id" = i64, Path, description = "The photo to unmark.")
    ),
    responses(
        (status = 204, description = "Favorite removed."),
        (status = 404, description = "The photo is not in the caller's favorites."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_favorite_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<StatusCode, FavoritesError> {
    remove_favorite(&context.pool, user.id, photo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip a photo's favorite mark and report which way it went.
#[utoipa::path(
    post,
    path = "/favorites/toggle/{photo_id}",
    tag = "Favorites",
    params(
        ("photo_id" = i64, Path, description = "The photo to toggle.")
    ),
    responses(
        (status = 200, description = "The applied action and resulting state.", body = ToggleFavoriteResponse),
        (status = 403, description = "No access to this photo's album."),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn toggle_favorite_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<Json<ToggleFavoriteResponse>, FavoritesError> {
    let response = toggle_favorite(&context.pool, user.id, photo_id).await?;
    Ok(Json(response))
}

/// Whether the caller has favorited a photo. A plain lookup on their own
/// marks that never fails on access.
#[utoipa::path(
    get,
    path = "/photos/{photo_id}/favorite-status",
    tag = "Favorites",
    params(
        ("photo_id" = i64, Path, description = "The unique ID of the photo.")
    ),
    responses(
        (status = 200, description = "Whether the photo is a favorite.", body = FavoriteStatusResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_favorite_status_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<Json<FavoriteStatusResponse>, FavoritesError> {
    let response = favorite_status(&context.pool, user.id, photo_id).await?;
    Ok(Json(response))
}

/// Page through the caller's favorites, newest mark first.
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "Favorites",
    params(FavoritePageParams),
    responses(
        (status = 200, description = "One page of favorites with the overall total.", body = FavoritesPageResponse),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_favorites_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Query(params): Query<FavoritePageParams>,
) -> Result<Json<FavoritesPageResponse>, FavoritesError> {
    let response = list_favorites(&context.pool, user.id, &params).await?;
    Ok(Json(response))
}

/// The caller's favorites grouped by album, most favorited album first.
#[utoipa::path(
    get,
    path = "/favorites/albums",
    tag = "Favorites",
    responses(
        (status = 200, description = "Favorite counts per album.", body = Vec<AlbumFavoriteCount>),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_favorite_albums_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<AlbumFavoriteCount>>, FavoritesError> {
    let albums = list_favorites_by_album(&context.pool, user.id).await?;
    Ok(Json(albums))
}
