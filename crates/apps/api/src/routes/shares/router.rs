use crate::api_state::ApiContext;
use crate::shares::handlers::{create_share_handler, get_album_shares_handler, revoke_share_handler};
use axum::Router;
use axum::routing::{delete, get};

pub fn shares_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/albums/{album_id}/shares",
            get(get_album_shares_handler).post(create_share_handler),
        )
        .route(
            "/albums/{album_id}/shares/{user_id}",
            delete(revoke_share_handler),
        )
}
