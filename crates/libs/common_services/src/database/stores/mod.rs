pub mod album_store;
pub mod comment_store;
pub mod favorite_store;
pub mod photo_store;
pub mod refresh_token_store;
pub mod share_store;
pub mod stats_store;
pub mod user_store;
