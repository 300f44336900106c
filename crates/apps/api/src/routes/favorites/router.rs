use crate::api_state::ApiContext;
use crate::favorites::handlers::{
    add_favorite_handler, get_favorite_albums_handler, get_favorite_status_handler,
    get_favorites_handler, remove_favorite_handler, toggle_favorite_handler,
};
use axum::Router;
use axum::routing::{get, post};

pub fn favorites_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/favorites", get(get_favorites_handler))
        .route("/favorites/albums", get(get_favorite_albums_handler))
        .route(
            "/favorites/{photo_id}",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
        .route("/favorites/toggle/{photo_id}", post(toggle_favorite_handler))
        .route(
            "/photos/{photo_id}/favorite-status",
            get(get_favorite_status_handler),
        )
}
