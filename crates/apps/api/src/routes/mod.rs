pub mod albums;
mod api_doc;
pub mod auth;
pub mod comments;
pub mod favorites;
pub mod photos;
pub mod profile;
pub mod root;
pub mod shares;
pub mod stats;

use crate::albums::router::albums_protected_router;
use crate::api_state::ApiContext;
use crate::auth::middleware::ApiUser;
use crate::auth::router::{auth_protected_router, auth_public_router};
use crate::comments::router::comments_protected_router;
use crate::favorites::router::favorites_protected_router;
use crate::photos::router::photos_protected_router;
use crate::profile::router::profile_protected_router;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use crate::shares::router::shares_protected_router;
use crate::stats::router::stats_protected_router;
use app_state::RateLimitingSettings;
use axum::Router;
use axum::middleware::from_extractor_with_state;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(public_routes(&api_state.settings.api.rate_limiting))
        .merge(protected_routes(api_state.clone()))
        .with_state(api_state)
}

fn public_routes(rate_limiting: &RateLimitingSettings) -> Router<ApiContext> {
    Router::new()
        .merge(auth_public_router(rate_limiting))
        .merge(root_public_router())
}

fn protected_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(auth_protected_router())
        .merge(profile_protected_router())
        .merge(albums_protected_router())
        .merge(shares_protected_router())
        .merge(photos_protected_router(&api_state.settings.storage))
        .merge(comments_protected_router())
        .merge(favorites_protected_router())
        .merge(stats_protected_router())
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}
