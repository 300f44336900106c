use crate::api::access::error::AccessError;
use crate::api::access::interfaces::AlbumAccess;
use crate::database::album::AlbumOwnership;
use crate::database::album_store::AlbumStore;
use crate::database::comment::Comment;
use crate::database::comment_store::CommentStore;
use crate::database::photo::PhotoOrigin;
use crate::database::photo_store::PhotoStore;
use crate::database::share_store::ShareStore;
use sqlx::SqlitePool;

/// Resolve a user's standing on an album.
///
/// Ownership wins outright, then an explicit share grant, then public
/// visibility. The existence check comes first so a missing album is
/// never reported as a permission problem.
pub async fn resolve_album_permission(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<AlbumAccess, AccessError> {
    let album = find_album(pool, album_id).await?;
    if album.owner_id == user_id {
        return Ok(AlbumAccess::Owner);
    }
    if let Some(share) = ShareStore::find(pool, album_id, user_id).await? {
        return Ok(AlbumAccess::Granted(share.permission));
    }
    if album.is_public {
        return Ok(AlbumAccess::PublicView);
    }
    Ok(AlbumAccess::None)
}

/// Owner, any share level, or public visibility.
pub async fn can_view_album(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<(), AccessError> {
    let access = resolve_album_permission(pool, user_id, album_id).await?;
    if access.can_view() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("no access to this album"))
    }
}

/// Owner or an `add` grant. Lower grants and public visibility do not
/// permit uploads.
pub async fn can_upload_to_album(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<(), AccessError> {
    let access = resolve_album_permission(pool, user_id, album_id).await?;
    if access.can_add_photos() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("no upload rights on this album"))
    }
}

/// Album mutation and deletion stay with the owner.
pub async fn can_edit_album(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<(), AccessError> {
    let access = resolve_album_permission(pool, user_id, album_id).await?;
    if access.is_owner() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("only the owner can modify an album"))
    }
}

/// Granting and revoking shares stays with the owner.
pub async fn can_manage_shares(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<(), AccessError> {
    let access = resolve_album_permission(pool, user_id, album_id).await?;
    if access.is_owner() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("only the owner can manage shares"))
    }
}

/// Viewing a photo means viewing its parent album.
pub async fn can_view_photo(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<(), AccessError> {
    let origin = find_photo(pool, photo_id).await?;
    let access = resolve_album_permission(pool, user_id, origin.album_id).await?;
    if access.can_view() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("no access to this photo"))
    }
}

/// Owner or a grant of at least `comment` on the parent album.
pub async fn can_comment_on_photo(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<(), AccessError> {
    let origin = find_photo(pool, photo_id).await?;
    let access = resolve_album_permission(pool, user_id, origin.album_id).await?;
    if access.can_comment() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("no comment rights on this photo"))
    }
}

/// Favoriting only needs view access on the parent album.
pub async fn can_favorite_photo(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<(), AccessError> {
    let origin = find_photo(pool, photo_id).await?;
    let access = resolve_album_permission(pool, user_id, origin.album_id).await?;
    if access.can_view() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("no access to this photo"))
    }
}

/// The uploader may delete their own photo, the album owner may delete
/// any photo in the album.
pub async fn can_delete_photo(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<(), AccessError> {
    let origin = find_photo(pool, photo_id).await?;
    if origin.uploaded_by == user_id {
        return Ok(());
    }
    let access = resolve_album_permission(pool, user_id, origin.album_id).await?;
    if access.is_owner() {
        Ok(())
    } else {
        Err(AccessError::Forbidden(
            "only the uploader or album owner can delete a photo",
        ))
    }
}

/// Editing or deleting a comment stays with its author. Album ownership
/// grants no override here.
pub async fn can_edit_comment(
    pool: &SqlitePool,
    user_id: i64,
    comment_id: i64,
) -> Result<(), AccessError> {
    let comment = find_comment(pool, comment_id).await?;
    if comment.user_id == user_id {
        Ok(())
    } else {
        Err(AccessError::Forbidden("only the author can modify a comment"))
    }
}

async fn find_album(pool: &SqlitePool, album_id: i64) -> Result<AlbumOwnership, AccessError> {
    AlbumStore::find_ownership(pool, album_id)
        .await?
        .ok_or(AccessError::AlbumNotFound(album_id))
}

async fn find_photo(pool: &SqlitePool, photo_id: i64) -> Result<PhotoOrigin, AccessError> {
    PhotoStore::find_origin(pool, photo_id)
        .await?
        .ok_or(AccessError::PhotoNotFound(photo_id))
}

async fn find_comment(pool: &SqlitePool, comment_id: i64) -> Result<Comment, AccessError> {
    CommentStore::find_by_id(pool, comment_id)
        .await?
        .ok_or(AccessError::CommentNotFound(comment_id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::database::create_test_pool;
    use crate::database::share::SharePermission;
    use crate::test_support::{seed_album, seed_comment, seed_photo, seed_share, seed_user};

    #[tokio::test]
    async fn owner_resolves_to_owner() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        let access = resolve_album_permission(&pool, owner.id, album.id).await?;
        assert_eq!(access, AlbumAccess::Owner);
        Ok(())
    }

    #[tokio::test]
    async fn share_grant_resolves_to_its_level() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Comment).await?;

        let access = resolve_album_permission(&pool, guest.id, album.id).await?;
        assert_eq!(access, AlbumAccess::Granted(SharePermission::Comment));
        Ok(())
    }

    #[tokio::test]
    async fn public_album_without_grant_resolves_to_public_view() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let album = seed_album(&pool, owner.id, "Open", true).await?;

        let access = resolve_album_permission(&pool, stranger.id, album.id).await?;
        assert_eq!(access, AlbumAccess::PublicView);
        assert!(can_view_album(&pool, stranger.id, album.id).await.is_ok());
        assert!(can_upload_to_album(&pool, stranger.id, album.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn grant_takes_precedence_over_public_visibility() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Open", true).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Add).await?;

        let access = resolve_album_permission(&pool, guest.id, album.id).await?;
        assert_eq!(access, AlbumAccess::Granted(SharePermission::Add));
        Ok(())
    }

    #[tokio::test]
    async fn private_album_without_grant_resolves_to_none() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let album = seed_album(&pool, owner.id, "Hidden", false).await?;

        let access = resolve_album_permission(&pool, stranger.id, album.id).await?;
        assert_eq!(access, AlbumAccess::None);
        assert!(can_view_album(&pool, stranger.id, album.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn missing_album_is_not_found_not_forbidden() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = seed_user(&pool, "user@example.com", "User").await?;

        let err = resolve_album_permission(&pool, user.id, 999).await.unwrap_err();
        assert!(matches!(err, AccessError::AlbumNotFound(999)));
        Ok(())
    }

    #[tokio::test]
    async fn upload_needs_the_add_level() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        for (email, level, allowed) in [
            ("v@example.com", SharePermission::View, false),
            ("c@example.com", SharePermission::Comment, false),
            ("a@example.com", SharePermission::Add, true),
        ] {
            let guest = seed_user(&pool, email, "Guest").await?;
            seed_share(&pool, album.id, guest.id, level).await?;
            let result = can_upload_to_album(&pool, guest.id, album.id).await;
            assert_eq!(result.is_ok(), allowed, "level {level} upload");
        }
        Ok(())
    }

    #[tokio::test]
    async fn comment_capability_implies_view() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Comment).await?;

        assert!(can_comment_on_photo(&pool, guest.id, photo.id).await.is_ok());
        assert!(can_view_album(&pool, guest.id, album.id).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn view_grant_does_not_permit_commenting() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", true).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::View).await?;

        let err = can_comment_on_photo(&pool, guest.id, photo.id).await.unwrap_err();
        assert!(matches!(err, AccessError::Forbidden(_)));
        Ok(())
    }

    #[tokio::test]
    async fn album_mutation_stays_with_the_owner() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Add).await?;

        assert!(can_edit_album(&pool, owner.id, album.id).await.is_ok());
        assert!(can_edit_album(&pool, guest.id, album.id).await.is_err());
        assert!(can_manage_shares(&pool, guest.id, album.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn photo_deletion_by_uploader_or_album_owner() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let adder = seed_user(&pool, "adder@example.com", "Adder").await?;
        let viewer = seed_user(&pool, "viewer@example.com", "Viewer").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        seed_share(&pool, album.id, adder.id, SharePermission::Add).await?;
        seed_share(&pool, album.id, viewer.id, SharePermission::View).await?;
        let photo = seed_photo(&pool, album.id, adder.id).await?;

        assert!(can_delete_photo(&pool, adder.id, photo.id).await.is_ok());
        assert!(can_delete_photo(&pool, owner.id, photo.id).await.is_ok());
        assert!(can_delete_photo(&pool, viewer.id, photo.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn comments_stay_with_their_author() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Comment).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        let comment = seed_comment(&pool, photo.id, guest.id, "nice shot").await?;

        assert!(can_edit_comment(&pool, guest.id, comment.id).await.is_ok());
        // Owning the album does not allow rewriting someone else's words.
        assert!(can_edit_comment(&pool, owner.id, comment.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn missing_photo_and_comment_are_not_found() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = seed_user(&pool, "user@example.com", "User").await?;

        assert!(matches!(
            can_view_photo(&pool, user.id, 404).await.unwrap_err(),
            AccessError::PhotoNotFound(404)
        ));
        assert!(matches!(
            can_edit_comment(&pool, user.id, 404).await.unwrap_err(),
            AccessError::CommentNotFound(404)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn favoriting_follows_view_access() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let open = seed_album(&pool, owner.id, "Open", true).await?;
        let hidden = seed_album(&pool, owner.id, "Hidden", false).await?;
        let public_photo = seed_photo(&pool, open.id, owner.id).await?;
        let hidden_photo = seed_photo(&pool, hidden.id, owner.id).await?;

        assert!(can_favorite_photo(&pool, stranger.id, public_photo.id).await.is_ok());
        assert!(can_favorite_photo(&pool, stranger.id, hidden_photo.id).await.is_err());
        Ok(())
    }
}
