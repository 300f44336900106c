pub mod album;
pub mod app_user;
pub mod comment;
pub mod favorite;
pub mod photo;
pub mod refresh_token;
pub mod share;
