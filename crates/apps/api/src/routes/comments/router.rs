use crate::api_state::ApiContext;
use crate::comments::handlers::{
    add_comment_handler, delete_comment_handler, get_photo_comments_handler,
    update_comment_handler,
};
use axum::Router;
use axum::routing::{get, put};

pub fn comments_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/photos/{photo_id}/comments",
            get(get_photo_comments_handler).post(add_comment_handler),
        )
        .route(
            "/comments/{comment_id}",
            put(update_comment_handler).delete(delete_comment_handler),
        )
}
