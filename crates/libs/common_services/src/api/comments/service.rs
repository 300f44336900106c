use crate::api::access::service::{can_comment_on_photo, can_edit_comment, can_view_photo};
use crate::api::comments::error::CommentsError;
use crate::api::comments::interfaces::CommentRequest;
use crate::database::comment::{Comment, CommentWithAuthor};
use crate::database::comment_store::CommentStore;
use sqlx::SqlitePool;

pub async fn add_comment(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
    payload: &CommentRequest,
) -> Result<Comment, CommentsError> {
    can_comment_on_photo(pool, user_id, photo_id).await?;

    let content = payload.content.trim();
    if content.is_empty() {
        return Err(CommentsError::BadRequest(
            "Comment cannot be empty".to_string(),
        ));
    }

    Ok(CommentStore::create(pool, photo_id, user_id, content).await?)
}

/// Reading the conversation under a photo needs view access to its album.
pub async fn list_comments(
    pool: &SqlitePool,
    user_id: i64,
    photo_id: i64,
) -> Result<Vec<CommentWithAuthor>, CommentsError> {
    can_view_photo(pool, user_id, photo_id).await?;
    Ok(CommentStore::list_by_photo(pool, photo_id).await?)
}

pub async fn update_comment(
    pool: &SqlitePool,
    user_id: i64,
    comment_id: i64,
    payload: &CommentRequest,
) -> Result<Comment, CommentsError> {
    can_edit_comment(pool, user_id, comment_id).await?;

    let content = payload.content.trim();
    if content.is_empty() {
        return Err(CommentsError::BadRequest(
            "Comment cannot be empty".to_string(),
        ));
    }

    Ok(CommentStore::update(pool, comment_id, content).await?)
}

pub async fn delete_comment(
    pool: &SqlitePool,
    user_id: i64,
    comment_id: i64,
) -> Result<(), CommentsError> {
    can_edit_comment(pool, user_id, comment_id).await?;
    CommentStore::delete(pool, comment_id).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::database::create_test_pool;
    use crate::database::share::SharePermission;
    use crate::test_support::{seed_album, seed_comment, seed_photo, seed_share, seed_user};

    fn body(content: &str) -> CommentRequest {
        CommentRequest {
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn comment_grant_allows_commenting_but_view_does_not() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let commenter = seed_user(&pool, "commenter@example.com", "Commenter").await?;
        let viewer = seed_user(&pool, "viewer@example.com", "Viewer").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_share(&pool, album.id, commenter.id, SharePermission::Comment).await?;
        seed_share(&pool, album.id, viewer.id, SharePermission::View).await?;

        let comment = add_comment(&pool, commenter.id, photo.id, &body("lovely light")).await?;
        assert_eq!(comment.content, "lovely light");
        assert_eq!(comment.user_id, commenter.id);

        let err = add_comment(&pool, viewer.id, photo.id, &body("me too")).await.unwrap_err();
        assert!(matches!(err, CommentsError::Forbidden(_)));
        Ok(())
    }

    #[tokio::test]
    async fn public_visibility_reads_but_does_not_write() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let album = seed_album(&pool, owner.id, "Open", true).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_comment(&pool, photo.id, owner.id, "first").await?;

        let listed = list_comments(&pool, stranger.id, photo.id).await?;
        assert_eq!(listed.len(), 1);

        let err = add_comment(&pool, stranger.id, photo.id, &body("hi")).await.unwrap_err();
        assert!(matches!(err, CommentsError::Forbidden(_)));
        Ok(())
    }

    #[tokio::test]
    async fn listing_requires_view_access() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let stranger = seed_user(&pool, "stranger@example.com", "Stranger").await?;
        let album = seed_album(&pool, owner.id, "Hidden", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_comment(&pool, photo.id, owner.id, "private note").await?;

        let err = list_comments(&pool, stranger.id, photo.id).await.unwrap_err();
        assert!(matches!(err, CommentsError::Forbidden(_)));
        Ok(())
    }

    #[tokio::test]
    async fn comments_read_oldest_first_with_author_names() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Comment).await?;
        seed_comment(&pool, photo.id, owner.id, "first").await?;
        seed_comment(&pool, photo.id, guest.id, "second").await?;

        let listed = list_comments(&pool, owner.id, photo.id).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].content, "first");
        assert_eq!(listed[0].author_name, "Owner");
        assert_eq!(listed[1].author_name, "Guest");
        Ok(())
    }

    #[tokio::test]
    async fn empty_content_is_rejected() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        let comment = seed_comment(&pool, photo.id, owner.id, "keep me").await?;

        let add = add_comment(&pool, owner.id, photo.id, &body("   ")).await;
        assert!(matches!(add, Err(CommentsError::BadRequest(_))));

        let update = update_comment(&pool, owner.id, comment.id, &body("")).await;
        assert!(matches!(update, Err(CommentsError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn only_the_author_can_edit_or_delete() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let owner = seed_user(&pool, "owner@example.com", "Owner").await?;
        let guest = seed_user(&pool, "guest@example.com", "Guest").await?;
        let album = seed_album(&pool, owner.id, "Trip", false).await?;
        let photo = seed_photo(&pool, album.id, owner.id).await?;
        seed_share(&pool, album.id, guest.id, SharePermission::Comment).await?;
        let comment = seed_comment(&pool, photo.id, guest.id, "original").await?;

        // Album ownership does not extend to other people's words.
        let edit = update_comment(&pool, owner.id, comment.id, &body("rewritten")).await;
        assert!(matches!(edit, Err(CommentsError::Forbidden(_))));
        let remove = delete_comment(&pool, owner.id, comment.id).await;
        assert!(matches!(remove, Err(CommentsError::Forbidden(_))));

        let updated = update_comment(&pool, guest.id, comment.id, &body("edited")).await?;
        assert_eq!(updated.content, "edited");
        assert!(updated.updated_at >= updated.created_at);

        delete_comment(&pool, guest.id, comment.id).await?;
        let listed = list_comments(&pool, owner.id, photo.id).await?;
        assert!(listed.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_photo_or_comment_is_not_found() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = seed_user(&pool, "user@example.com", "User").await?;

        let add = add_comment(&pool, user.id, 999, &body("hello")).await;
        assert!(matches!(add, Err(CommentsError::NotFound(_))));

        let edit = update_comment(&pool, user.id, 999, &body("hello")).await;
        assert!(matches!(edit, Err(CommentsError::NotFound(_))));
        Ok(())
    }
}
