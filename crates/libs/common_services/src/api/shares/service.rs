use crate::api::access::service::can_manage_shares;
use crate::api::shares::error::SharesError;
use crate::api::shares::interfaces::CreateShareRequest;
use crate::database::share::{Share, SharePermission, ShareWithUser};
use crate::database::share_store::ShareStore;
use crate::database::user_store::UserStore;
use sqlx::SqlitePool;
use tracing::info;

/// Grant a user access to an album, or change an existing grant's level.
/// The grantee is addressed by email; a second grant for the same user
/// overwrites the level instead of stacking rows.
pub async fn create_share(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
    payload: &CreateShareRequest,
) -> Result<Share, SharesError> {
    can_manage_shares(pool, user_id, album_id).await?;

    let email = payload.email.trim();
    let target = UserStore::find_by_email(pool, email)
        .await?
        .ok_or_else(|| SharesError::Conflict(format!("no account registered for {email}")))?;

    if target.id == user_id {
        return Err(SharesError::Conflict(
            "you cannot share an album with yourself".to_string(),
        ));
    }

    let permission = payload.permission.unwrap_or(SharePermission::View);
    let share = ShareStore::upsert(pool, album_id, target.id, permission).await?;
    info!(
        "User {} granted {} on album {} to user {}",
        user_id, permission, album_id, target.id
    );
    Ok(share)
}

/// Take back a user's grant on an album.
pub async fn revoke_share(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
    grantee_id: i64,
) -> Result<(), SharesError> {
    can_manage_shares(pool, user_id, album_id).await?;

    let deleted = ShareStore::delete(pool, album_id, grantee_id).await?;
    if deleted == 0 {
        return Err(SharesError::NotFound(format!(
            "no share on album {album_id} for user {grantee_id}"
        )));
    }
    info!(
        "User {} revoked access to album {} for user {}",
        user_id, album_id, grantee_id
    );
    Ok(())
}

/// Everyone the album is shared with, for the owner's manage screen.
pub async fn list_album_shares(
    pool: &SqlitePool,
    user_id: i64,
    album_id: i64,
) -> Result<Vec<ShareWithUser>, SharesError> {
    can_manage_shares(pool, user_id, album_id).await?;
    Ok(ShareStore::list_for_album(pool, album_id).await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::access::service::can_view_album;
    use crate::database::create_test_pool;
    use crate::test_support::{seed_album, seed_share, seed_user};

    fn grant(email: &str, permission: Option<SharePermission>) -> CreateShareRequest {
        CreateShareRequest {
            email: email.to_string(),
            permission,
        }
    }

    #[tokio::test]
    async fn regranting_overwrites_the_level_in_place() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        create_share(
            &pool,
            owner.id,
            album.id,
            &grant("guest@example.com", Some(SharePermission::View)),
        )
        .await?;
        create_share(
            &pool,
            owner.id,
            album.id,
            &grant("guest@example.com", Some(SharePermission::Add)),
        )
        .await?;

        let shares = list_album_shares(&pool, owner.id, album.id).await?;
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].user_id, guest.id);
        assert_eq!(shares[0].permission, SharePermission::Add);
        Ok(())
    }

    #[tokio::test]
    async fn grants_default_to_view() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        let share = create_share(&pool, owner.id, album.id, &grant("guest@example.com", None))
            .await?;
        assert_eq!(share.permission, SharePermission::View);
        Ok(())
    }

    #[tokio::test]
    async fn grantee_email_is_trimmed_before_lookup() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        let share = create_share(
            &pool,
            owner.id,
            album.id,
            &grant("  guest@example.com ", Some(SharePermission::Comment)),
        )
        .await?;
        assert_eq!(share.user_id, guest.id);
        Ok(())
    }

    #[tokio::test]
    async fn sharing_with_yourself_is_a_conflict() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        let err = create_share(&pool, owner.id, album.id, &grant("owner@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, SharesError::Conflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_email_is_a_conflict() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        let err = create_share(&pool, owner.id, album.id, &grant("nobody@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, SharesError::Conflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn share_management_stays_with_the_owner() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let other = seed_user(&pool, "other@example.com", "Other").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Add).await?;

        // Even the strongest grant does not confer share management.
        let err = create_share(&pool, guest.id, album.id, &grant("other@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, SharesError::Forbidden(_)));

        let err = revoke_share(&pool, guest.id, album.id, guest.id).await.unwrap_err();
        assert!(matches!(err, SharesError::Forbidden(_)));

        let err = list_album_shares(&pool, other.id, album.id).await.unwrap_err();
        assert!(matches!(err, SharesError::Forbidden(_)));
        Ok(())
    }

    #[tokio::test]
    async fn revoking_removes_the_grant() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Hidden", false).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::View).await?;

        assert!(can_view_album(&pool, guest.id, album.id).await.is_ok());
        revoke_share(&pool, owner.id, album.id, guest.id).await?;
        assert!(can_view_album(&pool, guest.id, album.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn revoking_a_missing_grant_is_not_found() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;

        let err = revoke_share(&pool, owner.id, album.id, guest.id).await.unwrap_err();
        assert!(matches!(err, SharesError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn missing_album_is_not_found_before_any_permission_check() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = seed_user(&pool, "user@example.com", "User").await?;

        let err = create_share(&pool, user.id, 999, &grant("user@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, SharesError::NotFound(_)));
        Ok(())
    }
}
