use crate::api::access::service::can_favorite_photo;
use crate::api::favorites::error::FavoritesError;
use crate::api::favorites::interfaces::{
    AddFavoriteResponse, FavoritePageParams, FavoriteStatusResponse, FavoritesPageResponse,
    ToggleAction, ToggleFavoriteResponse,
};
use crate::database::favorite::AlbumFavoriteCount;
use crate::database::favorite_store::FavoriteStore;
use sqlx::SqlitePool;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

/// Mark a photo as a favorite. Needs view access; marking twice keeps
/// the single existing row and says so.
pub async fn add_favorite(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<AddFavoriteResponse, FavoritesError> {
    can_favorite_photo(pool, user_id, photo_id).await?;

    if let Some(existing) = FavoriteStore::find(pool, user_id, photo_id).await? {
        return Ok(AddFavoriteResponse {
            favorite: existing,
            already_favorite: true,
        });
    }
    let favorite = FavoriteStore::insert(pool, user_id, photo_id).await?;
    Ok(AddFavoriteResponse {
        favorite,
        already_favorite: false,
    })
}

/// Unmark a photo. This only touches the caller's own row, so it works
/// even after their access to the album is gone.
pub async fn remove_favorite(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<(), FavoritesError> {
    let deleted = FavoriteStore::delete(pool, user_id, photo_id).await?;
    if deleted == 0 {
        return Err(FavoritesError::NotFound(format!(
            "photo {photo_id} is not in your favorites"
        )));
    }
    Ok(())
}

/// Flip the mark and report where it landed.
pub async fn toggle_favorite(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<ToggleFavoriteResponse, FavoritesError> {
    if FavoriteStore::find(pool, user_id, photo_id).await?.is_some() {
        FavoriteStore::delete(pool, user_id, photo_id).await?;
        return Ok(ToggleFavoriteResponse {
            action: ToggleAction::Removed,
            is_favorite: false,
        });
    }

    can_favorite_photo(pool, user_id, photo_id).await?;
    FavoriteStore::insert(pool, user_id, photo_id).await?;
    Ok(ToggleFavoriteResponse {
        action: ToggleAction::Added,
        is_favorite: true,
    })
}

pub async fn favorite_status(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<FavoriteStatusResponse, FavoritesError> {
    let is_favorite = FavoriteStore::find(pool, user_id, photo_id).await?.is_some();
    Ok(FavoriteStatusResponse { is_favorite })
}

pub async fn list_favorites(
    pool: &SqlitePool,
    user_id: i64,
    params: &FavoritePageParams,
) -> Result<FavoritesPageResponse, FavoritesError> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0).max(0);

    let favorites = FavoriteStore::list_by_user(pool, user_id, limit, offset).await?;
    let total = FavoriteStore::count_by_user(pool, user_id).await?;
    Ok(FavoritesPageResponse {
        favorites,
        total,
        limit,
        offset,
    })
}

pub async fn list_favorites_by_album(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<AlbumFavoriteCount>, FavoritesError> {
    Ok(FavoriteStore::list_albums(pool, user_id).await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::database::create_test_pool;
    use crate::database::share::SharePermission;
    use crate::database::share_store::ShareStore;
    use crate::test_support::{seed_album, seed_comment, seed_favorite, seed_photo, seed_share, seed_user};

    fn page(limit: Option<i64>, offset: Option<i64>) -> FavoritePageParams {
        FavoritePageParams { limit, offset }
    }

    #[tokio::test]
    async fn marking_follows_view_access() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let open = seed_album(&pool, owner.id, "Open", true).await?;
        let hidden = seed_album(&pool, owner.id, "Hidden", false).await?;
        let public_photo = seed_photo(&pool, open.id, owner.id).await?;
        let hidden_photo = seed_photo(&pool, hidden.id, owner.id).await?;

        let added = add_favorite(&pool, stranger.id, public_photo.id).await?;
        assert!(!added.already_favorite);

        let err = add_favorite(&pool, stranger.id, hidden_photo.id).await.unwrap_err();
        assert!(matches!(err, FavoritesError::Forbidden(_)));

        let missing = add_favorite(&pool, stranger.id, 999).await.unwrap_err();
        assert!(matches!(missing, FavoritesError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn re_marking_reports_already_favorite() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;

        let first = add_favorite(&pool, owner.id, photo.id).await?;
        let second = add_favorite(&pool, owner.id, photo.id).await?;
        assert!(!first.already_favorite);
        assert!(second.already_favorite);
        assert_eq!(first.favorite.id, second.favorite.id);

        let listed = list_favorites(&pool, owner.id, &page(None, None)).await?;
        assert_eq!(listed.total, 1);
        Ok(())
    }

    #[tokio::test]
    async fn removing_an_absent_mark_is_not_found() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;

        let err = remove_favorite(&pool, owner.id, photo.id).await.unwrap_err();
        assert!(matches!(err, FavoritesError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn unmarking_outlives_revoked_access() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Hidden", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::View).await?;
        seed_favorite(&pool, guest.id, photo.id).await?;

        ShareStore::delete(&pool, album.id, guest.id).await?;

        // The album is out of reach again, but the bookmark is the guest's own.
        assert!(add_favorite(&pool, guest.id, photo.id).await.is_err());
        remove_favorite(&pool, guest.id, photo.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn toggle_flips_the_mark_and_reports_it() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;

        let on = toggle_favorite(&pool, owner.id, photo.id).await?;
        assert_eq!(on.action, ToggleAction::Added);
        assert!(on.is_favorite);
        assert!(favorite_status(&pool, owner.id, photo.id).await?.is_favorite);

        let off = toggle_favorite(&pool, owner.id, photo.id).await?;
        assert_eq!(off.action, ToggleAction::Removed);
        assert!(!off.is_favorite);
        assert!(!favorite_status(&pool, owner.id, photo.id).await?.is_favorite);
        Ok(())
    }

    #[tokio::test]
    async fn list_pages_newest_first_with_totals() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let first = seed_photo(&pool, album.id, owner.id).await?;
        let second = seed_photo(&pool, album.id, owner.id).await?;
        let third = seed_photo(&pool, album.id, owner.id).await?;
        seed_comment(&pool, third.id, owner.id, "note").await?;
        for photo_id in [first.id, second.id, third.id] {
            seed_favorite(&pool, owner.id, photo_id).await?;
        }

        let front = list_favorites(&pool, owner.id, &page(Some(2), None)).await?;
        assert_eq!(front.total, 3);
        assert_eq!(front.favorites.len(), 2);
        assert_eq!(front.favorites[0].id, third.id);
        assert_eq!(front.favorites[0].album_title, "Trip");
        assert_eq!(front.favorites[0].uploader_name, "Owner");
        assert_eq!(front.favorites[0].comment_count, 1);

        let back = list_favorites(&pool, owner.id, &page(Some(2), Some(2))).await?;
        assert_eq!(back.favorites.len(), 1);
        assert_eq!(back.favorites[0].id, first.id);
        Ok(())
    }

    #[tokio::test]
    async fn albums_rank_by_favorite_count() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let busy = seed_album(&pool, owner.id, "Busy", false).await?;
        let quiet = seed_album(&pool, owner.id, "Quiet", false).await?;
        for _ in 0..2 {
            let photo = seed_photo(&pool, busy.id, owner.id).await?;
            seed_favorite(&pool, owner.id, photo.id).await?;
        }
        let photo = seed_photo(&pool, quiet.id, owner.id).await?;
        seed_favorite(&pool, owner.id, photo.id).await?;

        let albums = list_favorites_by_album(&pool, owner.id).await?;
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].id, busy.id);
        assert_eq!(albums[0].favorite_count, 2);
        assert_eq!(albums[1].favorite_count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn status_is_a_plain_lookup_on_own_rows() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let hidden = seed_album(&pool, owner.id, "Hidden", false).await?;
        let photo = seed_photo(&pool, hidden.id, owner.id).await?;

        // No access and no row both read as "not a favorite", nothing leaks.
        let status = favorite_status(&pool, stranger.id, photo.id).await?;
        assert!(!status.is_favorite);
        Ok(())
    }
}
