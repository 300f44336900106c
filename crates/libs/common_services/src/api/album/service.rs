use crate::api::access::service::{can_edit_album, resolve_album_permission};
use crate::api::album::error::AlbumError;
use crate::api::album::interfaces::{AlbumDetailsResponse, CreateAlbumRequest, UpdateAlbumRequest};
use crate::database::album::{Album, AlbumWithCount, SharedAlbum};
use crate::database::album_store::AlbumStore;
use crate::database::comment_store::CommentStore;
use crate::database::favorite_store::FavoriteStore;
use crate::database::photo_store::PhotoStore;
use crate::database::share_store::ShareStore;
use sqlx::SqlitePool;
use sqlx::types::Json;
use std::path::Path;
use tracing::{info, warn};

pub async fn create_album(
    pool: &SqlitePool,
    user_id: i64,
    payload: &CreateAlbumRequest,
) -> Result<Album, AlbumError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AlbumError::BadRequest("Title is required".to_string()));
    }

    let tags = Json(payload.tags.clone().unwrap_or_default());
    let album = AlbumStore::create(
        pool,
        user_id,
        title,
        payload.description.as_deref(),
        tags,
        payload.is_public.unwrap_or(false),
    )
    .await?;
    info!("User {} created album {}", user_id, album.id);
    Ok(album)
}

pub async fn list_my_albums(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<AlbumWithCount>, AlbumError> {
    Ok(AlbumStore::list_by_owner(pool, user_id).await?)
}

pub async fn list_shared_with_me(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<SharedAlbum>, AlbumError> {
    Ok(ShareStore::list_shared_with_user(pool, user_id).await?)
}

/// Album detail with the caller's effective permission attached.
pub async fn get_album(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<AlbumDetailsResponse, AlbumError> {
    let access = resolve_album_permission(pool, user_id, album_id).await?;
    if !access.can_view() {
        return Err(AlbumError::Forbidden("no access to this album".to_string()));
    }

    let album = AlbumStore::find_with_owner(pool, album_id)
        .await?
        .ok_or_else(|| AlbumError::NotFound(format!("album {album_id}")))?;

    Ok(AlbumDetailsResponse {
        album,
        user_permission: access.as_str().to_string(),
    })
}

pub async fn update_album(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
    payload: &UpdateAlbumRequest,
) -> Result<Album, AlbumError> {
    can_edit_album(pool, user_id, album_id).await?;

    let title = match &payload.title {
        Some(title) if title.trim().is_empty() => {
            return Err(AlbumError::BadRequest("Title cannot be empty".to_string()));
        }
        Some(title) => Some(title.trim()),
        None => None,
    };

    let album = AlbumStore::update(
        pool,
        album_id,
        title,
        payload.description.as_deref(),
        payload.tags.clone().map(Json),
        payload.is_public,
    )
    .await?;
    Ok(album)
}

/// Remove an album with everything hanging off it. Rows go first, in one
/// transaction; files are cleaned up afterwards, best effort.
pub async fn delete_album(
    pool: &SqlitePool,
    media_root: &Path,
    user_id: i64,
    album_id: i64,
) -> Result<(), AlbumError> {
    can_edit_album(pool, user_id, album_id).await?;

    let filenames = PhotoStore::list_filenames_by_album(pool, album_id).await?;

    let mut tx = pool.begin().await?;
    CommentStore::delete_by_album(&mut *tx, album_id).await?;
    FavoriteStore::delete_by_album(&mut *tx, album_id).await?;
    PhotoStore::delete_by_album(&mut *tx, album_id).await?;
    ShareStore::delete_by_album(&mut *tx, album_id).await?;
    AlbumStore::delete(&mut *tx, album_id).await?;
    tx.commit().await?;

    info!(
        "User {} deleted album {} ({} photos)",
        user_id,
        album_id,
        filenames.len()
    );
    for filename in filenames {
        let path = media_root.join(&filename);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!("Could not remove {}: {}", path.display(), e);
        }
    }
    Ok(())
}
