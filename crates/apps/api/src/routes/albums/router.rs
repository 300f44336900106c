use crate::albums::handlers::{
    create_album_handler, delete_album_handler, get_album_handler, get_my_albums_handler,
    get_shared_albums_handler, update_album_handler,
};
use crate::api_state::ApiContext;
use axum::{Router, routing::get};

pub fn albums_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/albums",
            get(get_my_albums_handler).post(create_album_handler),
        )
        .route("/albums/shared", get(get_shared_albums_handler))
        .route(
            "/albums/{album_id}",
            get(get_album_handler)
                .put(update_album_handler)
                .delete(delete_album_handler),
        )
}
