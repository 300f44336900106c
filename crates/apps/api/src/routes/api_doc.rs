use crate::routes::{albums, auth, comments, favorites, photos, profile, root, shares, stats};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Auth handlers
        auth::handlers::login,
        auth::handlers::register,
        auth::handlers::refresh_session,
        auth::handlers::logout,
        auth::handlers::get_me,
        // Profile handlers
        profile::handlers::update_name,
        profile::handlers::update_email,
        profile::handlers::update_password,
        // Album handlers
        albums::handlers::create_album_handler,
        albums::handlers::get_my_albums_handler,
        albums::handlers::get_shared_albums_handler,
        albums::handlers::get_album_handler,
        albums::handlers::update_album_handler,
        albums::handlers::delete_album_handler,
        // Share handlers
        shares::handlers::create_share_handler,
        shares::handlers::get_album_shares_handler,
        shares::handlers::revoke_share_handler,
        // Photo handlers
        photos::handlers::upload_photo_handler,
        photos::handlers::get_album_photos_handler,
        photos::handlers::get_last_photo_handler,
        photos::handlers::get_photo_feed_handler,
        photos::handlers::search_photos_handler,
        photos::handlers::get_photo_image_handler,
        photos::handlers::delete_photo_handler,
        photos::handlers::get_comment_permission_handler,
        // Comment handlers
        comments::handlers::add_comment_handler,
        comments::handlers::get_photo_comments_handler,
        comments::handlers::update_comment_handler,
        comments::handlers::delete_comment_handler,
        // Favorite handlers
        favorites::handlers::add_favorite_handler,
        favorites::handlers::remove_favorite_handler,
        favorites::handlers::toggle_favorite_handler,
        favorites::handlers::get_favorite_status_handler,
        favorites::handlers::get_favorites_handler,
        favorites::handlers::get_favorite_albums_handler,
        // Stats handlers
        stats::handlers::get_stats_handler,
    ),
    components(
        schemas(
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Lumen", description = "Lumen's photo album API"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Profile", description = "Endpoints for managing the caller's own account"),
        (name = "Albums", description = "Endpoints for managing photo albums"),
        (name = "Shares", description = "Endpoints for sharing albums with other users"),
        (name = "Photos", description = "Endpoints for uploading, browsing and searching photos"),
        (name = "Comments", description = "Endpoints for discussing photos"),
        (name = "Favorites", description = "Endpoints for marking and listing favorite photos"),
        (name = "Stats", description = "Usage statistics endpoints"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
