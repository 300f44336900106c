pub mod access;
pub mod album;
pub mod auth;
pub mod comments;
pub mod favorites;
pub mod photos;
pub mod profile;
pub mod shares;
pub mod stats;
