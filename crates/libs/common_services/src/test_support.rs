//! Seed helpers shared by the service tests.

use crate::database::album::Album;
use crate::database::album_store::AlbumStore;
use crate::database::app_user::User;
use crate::database::comment::Comment;
use crate::database::comment_store::CommentStore;
use crate::database::favorite::Favorite;
use crate::database::favorite_store::FavoriteStore;
use crate::database::photo::Photo;
use crate::database::photo_store::PhotoStore;
use crate::database::share::{Share, SharePermission};
use crate::database::share_store::ShareStore;
use crate::database::user_store::UserStore;
use crate::utils::nice_id;
use chrono::Utc;
use color_eyre::Result;
use sqlx::SqlitePool;
use sqlx::types::Json;

/// Password hashing is slow on purpose, so seeded users get a
/// placeholder hash. Tests that exercise login go through the real
/// registration path instead.
pub async fn seed_user(pool: &SqlitePool, email: &str, name: &str) -> Result<User> {
    Ok(UserStore::create(pool, email, name, "placeholder-hash").await?)
}

pub async fn seed_album(
    pool: &SqlitePool,
    owner_id: i64,
    title: &str,
    is_public: bool,
) -> Result<Album> {
    Ok(AlbumStore::create(pool, owner_id, title, None, Json(vec![]), is_public).await?)
}

pub async fn seed_photo(pool: &SqlitePool, album_id: i64, uploaded_by: i64) -> Result<Photo> {
    let filename = format!("{}.jpg", nice_id(12));
    Ok(PhotoStore::create(
        pool,
        album_id,
        uploaded_by,
        &filename,
        None,
        Json(vec![]),
        Utc::now(),
        1024,
    )
    .await?)
}

pub async fn seed_comment(
    pool: &SqlitePool,
    photo_id: i64,
    user_id: i64,
    content: &str,
) -> Result<Comment> {
    Ok(CommentStore::create(pool, photo_id, user_id, content).await?)
}

pub async fn seed_share(
    pool: &SqlitePool,
    album_id: i64,
    user_id: i64,
    permission: SharePermission,
) -> Result<Share> {
    Ok(ShareStore::upsert(pool, album_id, user_id, permission).await?)
}

pub async fn seed_favorite(pool: &SqlitePool, user_id: i64, photo_id: i64) -> Result<Favorite> {
    Ok(FavoriteStore::insert(pool, user_id, photo_id).await?)
}
