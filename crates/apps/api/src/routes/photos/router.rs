use crate::api_state::ApiContext;
use crate::photos::handlers::{
    delete_photo_handler, get_album_photos_handler, get_comment_permission_handler,
    get_last_photo_handler, get_photo_feed_handler, get_photo_image_handler,
    search_photos_handler, upload_photo_handler,
};
use app_state::StorageSettings;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};

/// Headroom on top of the file size limit for the other form fields.
const UPLOAD_FORM_SLACK: usize = 64 * 1024;

pub fn photos_protected_router(storage: &StorageSettings) -> Router<ApiContext> {
    // Axum caps request bodies at 2 MB by default, far below our upload limit.
    let body_limit = storage.max_upload_bytes as usize + UPLOAD_FORM_SLACK;
    Router::new()
        .route(
            "/albums/{album_id}/photos",
            post(upload_photo_handler).get(get_album_photos_handler),
        )
        .route("/albums/{album_id}/photos/last", get(get_last_photo_handler))
        .route("/photos", get(get_photo_feed_handler))
        .route("/photos/search", get(search_photos_handler))
        .route("/photos/{photo_id}", delete(delete_photo_handler))
        .route("/photos/{photo_id}/image", get(get_photo_image_handler))
        .route(
            "/photos/{photo_id}/comment-permission",
            get(get_comment_permission_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
