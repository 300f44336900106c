use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::album::error::AlbumError;
use common_services::api::album::interfaces::{
    AlbumDetailsResponse, CreateAlbumRequest, UpdateAlbumRequest,
};
use common_services::api::album::service::{
    create_album, delete_album, get_album, list_my_albums, list_shared_with_me, update_album,
};
use common_services::database::album::{Album, AlbumWithCount, SharedAlbum};
use common_services::database::app_user::User;

/// Create a new album owned by the caller.
#[utoipa::path(
    post,
    path = "/albums",
    tag = "Albums",
    request_body = CreateAlbumRequest,
    responses(
        (status = 201, description = "Album created successfully.", body = Album),
        (status = 400, description = "Title missing or empty."),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<Album>), AlbumError> {
    let album = create_album(&context.pool, user.id, &payload).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// List the albums the caller owns, with photo counts.
#[utoipa::path(
    get,
    path = "/albums",
    tag = "Albums",
    responses(
        (status = 200, description = "The caller's albums.", body = Vec<AlbumWithCount>),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_albums_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<AlbumWithCount>>, AlbumError> {
    let albums = list_my_albums(&context.pool, user.id).await?;
    Ok(Json(albums))
}

/// List albums other people shared with the caller.
#[utoipa::path(
    get,
    path = "/albums/shared",
    tag = "Albums",
    responses(
        (status = 200, description = "Albums shared with the caller.", body = Vec<SharedAlbum>),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_shared_albums_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<SharedAlbum>>, AlbumError> {
    let albums = list_shared_with_me(&context.pool, user.id).await?;
    Ok(Json(albums))
}

/// Get one album with the caller's effective permission on it.
#[utoipa::path(
    get,
    path = "/albums/{album_id}",
    tag = "Albums",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album.")
    ),
    responses(
        (status = 200, description = "Album details.", body = AlbumDetailsResponse),
        (status = 403, description = "No access to this album."),
        (status = 404, description = "Album not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<Json<AlbumDetailsResponse>, AlbumError> {
    let details = get_album(&context.pool, user.id, album_id).await?;
    Ok(Json(details))
}

/// Update an album's title, description, tags or visibility. Owner only.
#[utoipa::path(
    put,
    path = "/albums/{album_id}",
    tag = "Albums",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album to update.")
    ),
    request_body = UpdateAlbumRequest,
    responses(
        (status = 200, description = "Album updated successfully.", body = Album),
        (status = 403, description = "Only the owner can modify an album."),
        (status = 404, description = "Album not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
    Json(payload): Json<UpdateAlbumRequest>,
) -> Result<Json<Album>, AlbumError> {
    let album = update_album(&context.pool, user.id, album_id, &payload).await?;
    Ok(Json(album))
}

/// Delete an album with its photos, comments, favorites and shares. Owner only.
#[utoipa::path(
    delete,
    path = "/albums/{album_id}",
    tag = "Albums",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album to delete.")
    ),
    responses(
        (status = 204, description = "Album deleted."),
        (status = 403, description = "Only the owner can delete an album."),
        (status = 404, description = "Album not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<StatusCode, AlbumError> {
    delete_album(
        &context.pool,
        &context.settings.storage.media_root,
        user.id,
        album_id,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
