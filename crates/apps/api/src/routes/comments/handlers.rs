use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::comments::error::CommentsError;
use common_services::api::comments::interfaces::CommentRequest;
use common_services::api::comments::service::{
    add_comment, delete_comment, list_comments, update_comment,
};
use common_services::database::app_user::User;
use common_services::database::comment::{Comment, CommentWithAuthor};

/// Comment on a photo. Requires the `comment` permission or better.
#[utoipa::path(
    post,
    path = "/photos/{photo_id}/comments",
    tag = "Comments",
    params(
        ("photo_id" = i64, Path, description = "The photo being commented on.")
    ),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = Comment),
        (status = 400, description = "Comment content is empty."),
        (status = 403, description = "No comment permission on this photo's album."),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_comment_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), CommentsError> {
    let comment = add_comment(&context.pool, user.id, photo_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// List a photo's comments, oldest first, with author names.
#[utoipa::path(
    get,
    path = "/photos/{photo_id}/comments",
    tag = "Comments",
    params(
        ("photo_id" = i64, Path, description = "The unique ID of the photo.")
    ),
    responses(
        (status = 200, description = "The photo's comments.", body = Vec<CommentWithAuthor>),
        (status = 403, description = "No access to this photo's album."),
        (status = 404, description = "Photo not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_photo_comments_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(photo_id): Path<i64>,
) -> Result<Json<Vec<CommentWithAuthor>>, CommentsError> {
    let comments = list_comments(&context.pool, user.id, photo_id).await?;
    Ok(Json(comments))
}

/// Edit a comment. Only its author can.
#[utoipa::path(
    put,
    path = "/comments/{comment_id}",
    tag = "Comments",
    params(
        ("comment_id" = i64, Path, description = "The unique ID of the comment.")
    ),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = Comment),
        (status = 400, description = "Comment content is empty."),
        (status = 403, description = "Only the author can edit a comment."),
        (status = 404, description = "Comment not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_comment_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(comment_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<Comment>, CommentsError> {
    let comment = update_comment(&context.pool, user.id, comment_id, &payload).await?;
    Ok(Json(comment))
}

/// Delete a comment. Only its author can.
#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    tag = "Comments",
    params(
        ("comment_id" = i64, Path, description = "The unique ID of the comment.")
    ),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 403, description = "Only the author can delete a comment."),
        (status = 404, description = "Comment not found."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_comment_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(comment_id): Path<i64>,
) -> Result<StatusCode, CommentsError> {
    delete_comment(&context.pool, user.id, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
