use crate::api::access::error::AccessError;
use crate::api::access::service::{
    can_comment_on_photo, can_delete_photo, can_upload_to_album, can_view_album, can_view_photo,
};
use crate::api::photos::error::PhotosError;
use crate::api::photos::interfaces::{PhotoPageParams, PhotoSearchQuery, PhotoUpload};
use crate::database::comment_store::CommentStore;
use crate::database::favorite_store::FavoriteStore;
use crate::database::photo::{Photo, PhotoWithContext, PhotoWithUploader};
use crate::database::photo_store::{PhotoSearchParams, PhotoStore};
use crate::utils::nice_id;
use app_state::StorageSettings;
use axum::body::Body;
use chrono::Utc;
use color_eyre::Report;
use http::{Response, StatusCode, header};
use sqlx::SqlitePool;
use sqlx::types::Json;
use std::path::Path;
use tokio::fs::File;
use tokio_util::codec::{BytesCodec, FramedRead};
use tracing::{info, warn};

/// Validates an upload, writes it under the media root with a generated
/// name and records it. A failed insert removes the file again.
pub async fn upload_photo(
    pool: &SqlitePool,
    storage: &StorageSettings,
    user_id: i64,
    album_id: i64,
    upload: PhotoUpload,
) -> Result<Photo, PhotosError> {
    can_upload_to_album(pool, user_id, album_id).await?;

    if upload.data.is_empty() {
        return Err(PhotosError::BadRequest("No file provided".to_string()));
    }
    if upload.data.len() as u64 > storage.max_upload_bytes {
        return Err(PhotosError::BadRequest(format!(
            "File exceeds the upload limit of {} bytes",
            storage.max_upload_bytes
        )));
    }
    let original = Path::new(&upload.filename);
    if !storage.is_photo_file(original) {
        return Err(PhotosError::UnsupportedMediaType);
    }
    let Some(extension) = original
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
    else {
        return Err(PhotosError::UnsupportedMediaType);
    };

    // Uploads never keep their client-side name on disk.
    let stored_name = format!("{}.{extension}", nice_id(16));
    let target = storage.media_root.join(&stored_name);
    tokio::fs::write(&target, &upload.data)
        .await
        .map_err(|e| Report::new(e).wrap_err("Failed to write uploaded photo"))?;

    let created = PhotoStore::create(
        pool,
        album_id,
        user_id,
        &stored_name,
        upload.description.as_deref(),
        Json(upload.tags),
        upload.date_taken.unwrap_or_else(Utc::now),
        upload.data.len() as i64,
    )
    .await;

    let photo = match created {
        Ok(photo) => photo,
        Err(err) => {
            if let Err(fs_err) = tokio::fs::remove_file(&target).await {
                warn!(
                    "Could not remove {} after a failed insert: {}",
                    target.display(),
                    fs_err
                );
            }
            return Err(err.into());
        }
    };

    info!(
        "User {} uploaded photo {} to album {}",
        user_id, photo.id, album_id
    );
    Ok(photo)
}

pub async fn list_album_photos(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<Vec<PhotoWithUploader>, PhotosError> {
    can_view_album(pool, user_id, album_id).await?;
    Ok(PhotoStore::list_by_album(pool, album_id).await?)
}

/// A paged feed over every photo the user may view, newest upload first.
pub async fn list_accessible(
    pool: &SqlitePool,
    user_id: i64,
    params: &PhotoPageParams,
) -> Result<Vec<PhotoWithContext>, PhotosError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = (page - 1) * limit;
    Ok(PhotoStore::list_accessible(pool, user_id, limit, offset).await?)
}

pub async fn search_photos(
    pool: &SqlitePool,
    user_id: i64,
    query: &PhotoSearchQuery,
) -> Result<Vec<PhotoWithContext>, PhotosError> {
    let text = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned);
    let tags = query.tags.as_deref().map(parse_tag_list).unwrap_or_default();

    let params = PhotoSearchParams {
        text,
        tags,
        album_id: query.album_id,
        taken_after: query.date_from,
        taken_before: query.date_to,
    };
    Ok(PhotoStore::search(pool, user_id, &params).await?)
}

fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// The most recently taken photo of an album, used for covers.
pub async fn last_photo(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<Option<Photo>, PhotosError> {
    can_view_album(pool, user_id, album_id).await?;
    Ok(PhotoStore::last_in_album(pool, album_id).await?)
}

/// Streams the stored file of a photo the user may view.
pub async fn serve_photo(
    pool: &SqlitePool,
    storage: &StorageSettings,
    user_id: i64,
    photo_id: i64,
) -> Result<Response<Body>, PhotosError> {
    let photo = PhotoStore::find_by_id(pool, photo_id)
        .await?
        .ok_or_else(|| PhotosError::NotFound(format!("photo {photo_id}")))?;
    can_view_photo(pool, user_id, photo_id).await?;

    let path = storage.media_root.join(&photo.filename);
    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => {
                warn!(
                    "Photo {} is recorded but missing on disk: {}",
                    photo.id,
                    path.display()
                );
                Err(PhotosError::NotFound(photo.filename.clone()))
            }
            std::io::ErrorKind::PermissionDenied => {
                Err(PhotosError::Forbidden("file is not readable".to_string()))
            }
            _ => Err(Report::new(e).wrap_err("Failed to open photo file").into()),
        }?,
    };

    let stream = FramedRead::new(file, BytesCodec::new());
    let body = Body::from_stream(stream);
    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
    let disposition = format!("inline; filename=\"{}\"", photo.filename);
    let disposition_header = header::HeaderValue::from_str(&disposition)
        .unwrap_or(header::HeaderValue::from_static("inline"));

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(header::CONTENT_DISPOSITION, disposition_header)
        // The same photo may be private for one viewer and not another,
        // so only browser caches may hold it.
        .header(header::CACHE_CONTROL, "private, max-age=86400")
        .body(body)
        .map_err(|e| Report::new(e).wrap_err("Failed to build response"))?)
}

/// Removes a photo with its comments and favorites, then its file.
/// Allowed for the uploader and for the album owner.
pub async fn delete_photo(
    pool: &SqlitePool,
    media_root: &Path,
    user_id: i64,
    photo_id: i64,
) -> Result<(), PhotosError> {
    can_delete_photo(pool, user_id, photo_id).await?;

    let photo = PhotoStore::find_by_id(pool, photo_id)
        .await?
        .ok_or_else(|| PhotosError::NotFound(format!("photo {photo_id}")))?;

    let mut tx = pool.begin().await?;
    CommentStore::delete_by_photo(&mut *tx, photo_id).await?;
    FavoriteStore::delete_by_photo(&mut *tx, photo_id).await?;
    PhotoStore::delete(&mut *tx, photo_id).await?;
    tx.commit().await?;
    info!("User {} deleted photo {}", user_id, photo_id);

    let path = media_root.join(&photo.filename);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        warn!("Could not remove {}: {}", path.display(), e);
    }
    Ok(())
}

/// Whether the user may comment on a photo, as a plain answer instead
/// of an error, so clients can show or hide their comment box.
pub async fn comment_allowed(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<bool, PhotosError> {
    match can_comment_on_photo(pool, user_id, photo_id).await {
        Ok(()) => Ok(true),
        Err(AccessError::Forbidden(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
