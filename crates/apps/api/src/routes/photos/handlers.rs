use crate::api_state::ApiContext;
use axum::body::{Body, Bytes};
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{Response, StatusCode};
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use common_services::api::photos::error::PhotosError;
use common_services::api::photos::interfaces::{
    CommentPermissionResponse, PhotoPageParams, PhotoSearchQuery, PhotoUpload,
};
use common_services::api::photos::service::{
    comment_allowed, delete_photo, last_photo, list_accessible, list_album_photos, search_photos,
    serve_photo, upload_photo,
};
use common_services::database::app_user::User;
use common_services::database::photo::{Photo, PhotoWithContext, PhotoWithUploader};
use utoipa::ToSchema;

/// Schema stand-in for the multipart upload form.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadPhotoRequest {
    #[schema(value_type = String, format = Binary)]
    pub photo: Vec<u8>,
    pub description: Option<String>,
    /// JSON array of tags, e.g. `["beach","sunset"]`.
    pub tags: Option<String>,
    /// RFC 3339 timestamp of when the photo was taken.
    pub date_taken: Option<String>,
}

fn bad_multipart(e: MultipartError) -> PhotosError {
    PhotosError::BadRequest(format!("Invalid multipart body: {e}"))
}

/// Upload a photo into an album. Requires the `add` permission or ownership.
#[utoipa::path(
    post,
    path = "/albums/{album_id}/photos",
    tag = "Photos",
    params(
        ("album_id" = i64, Path, description = "The album receiving the photo.")
    ),
    request_body(content_type = "multipart/form-data", content = UploadPhotoRequest),
    responses(
        (status = 201, description = "Photo uploaded successfully.", body = Photo),
        (status = 400, description = "Missing file, malformed form field, or file too large."),
        (status = 403, description = "No upload permission on this album."),
        (status = 404, description = "Album not found."),
        (status = 415, description = "The file extension is not an accepted photo format."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_photo_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Photo>), PhotosError> {
    let mut upload = PhotoUpload {
        filename: String::new(),
        data: Bytes::new(),
        description: None,
        tags: Vec::new(),
        date_taken: None,
    };

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        match name.as_str() {
            "photo" => {
                upload.filename = field.file_name().unwrap_or("upload").to_string();
                upload.data = field.bytes().await.map_err(bad_multipart)?;
            }
            "description" => {
                let text = field.text().await.map_err(bad_multipart)?;
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    upload.description = Some(trimmed.to_string());
                }
            }
            "tags" => {
                let text = field.text().await.map_err(bad_multipart)?;
                upload.tags = serde_json::from_str(&text).map_err(|_| {
                    PhotosError::BadRequest("Tags must be a JSON array of strings".to_string())
                })?;
            }
            "date_taken" => {
                let text = field.text().await.map_err(bad_multipart)?;
                let parsed = text.parse::<DateTime<Utc>>().map_err(|_| {
                    PhotosError::BadRequest(
                        "date_taken must be an RFC 3339 timestamp".to_string(),
                    )
                })?;
                upload.date_taken = Some(parsed);
            }
            _ => {}
        }
    }

    let photo = upload_photo(
        &context.pool,
        &context.settings.storage,
        user.id,
        album_id,
        upload,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// List the photos of an album, newest upload first.
#[utoipa::path(
    get,
    path = "/albums/{album_id}/photos",
    tag = "Photos",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album.")
    ),
    responses(
        (status = 200, description = "The album's photos with uploader names.", body = Vec<PhotoWithUploader>),
        (status = 403, description = "No access to this album."),
        (status = 404, description = "Album not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_album_photos_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<Json<Vec<PhotoWithUploader>>, PhotosError> {
    let photos = list_album_photos(&context.pool, user.id, album_id).await?;
    Ok(Json(photos))
}

/// Get the most recently uploaded photo of an album, or null if it is empty.
#[utoipa::path(
    get,
    path = "/albums/{album_id}/photos/last",
    tag = "Photos",
    params(
        ("album_id" = i64, Path, description = "The unique ID of the album.")
    ),
    responses(
        (status = 200, description = "The newest photo, or null for an empty album.", body = Option<Photo>),
        (status = 403, description = "No access to this album."),
        (status = 404, description = "Album not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_last_photo_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<Json<Option<Photo>>, PhotosError> {
    let photo = last_photo(&context.pool, user.id, album_id).await?;
    Ok(Json(photo))
}

/// A paged feed over every photo the caller may view, newest upload first.
#[utoipa::path(
    get,
    path = "/photos",
    tag = "Photos",
    params(PhotoPageParams),
    responses(
        (status = 200, description = "One page of the caller's photo feed.", body = Vec<PhotoWithContext>),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_photo_feed_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Query(params): Query<PhotoPageParams>,
) -> Result<Json<Vec<PhotoWithContext>>, PhotosError> {
    let photos = list_accessible(&context.pool, user.id, &params).await?;
    Ok(Json(photos))
}

/// Search the caller's accessible photos by text, tags, album and date range.
#[utoipa::path(
    get,
    path = "/photos/search",
    tag = "Photos",
    params(PhotoSearchQuery),
    responses(
        (status = 200, description = "Photos matching every given filter.", body = Vec<PhotoWithContext>),
        (status = 401, description = "Authentication required."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_photos_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Query(query): Query<PhotoSearchQuery>,
) -> Result<Json<Vec<PhotoWithContext>>, PhotosError> {
    let photos = search_photos(&context.pool, user.id, &query).await?;
    Ok(Json(photos))
}

/// Stream the stored image file of a photo the caller may view.
#[utoipa::path(
    get,
    path = "/photos/{photo_id}/image",
    tag = "Photos",
    params(
        ("photo_id" = i64, Path, description = "The unique ID of the photo.")
    ),
    responses(
        (status = 200, description = "The photo bytes with their MIME type."),
        (status = 403, description = "No access to this photo's album."),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_photo_image_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<Response<Body>, PhotosError> {
    serve_photo(&context.pool, &context.settings.storage, user.id, photo_id).await
}

/// Delete a photo. Allowed for its uploader and for the album owner.
#[utoipa::path(
    delete,
    path = "/photos/{photo_id}",
    tag = "Photos",
    params(
        ("photo_id" = i64, Path, description = "The unique ID of the photo to delete.")
    ),
    responses(
        (status = 204, description = "Photo deleted."),
        (status = 403, description = "Only the uploader or the album owner can delete a photo."),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_photo_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<StatusCode, PhotosError> {
    delete_photo(
        &context.pool,
        &context.settings.storage.media_root,
        user.id,
        photo_id,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Whether the caller may comment on a photo, for showing the comment box.
#[utoipa::path(
    get,
    path = "/photos/{photo_id}/comment-permission",
    tag = "Photos",
    params(
        ("photo_id" = i64, Path, description = "The unique ID of the photo.")
    ),
    responses(
        (status = 200, description = "Whether commenting is allowed.", body = CommentPermissionResponse),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_comment_permission_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<Json<CommentPermissionResponse>, PhotosError> {
    let allowed = comment_allowed(&context.pool, user.id, photo_id).await?;
    Ok(Json(CommentPermissionResponse { allowed }))
}
