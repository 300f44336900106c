use serde::Deserialize;
use utoipa::ToSchema;

/// Body for posting a new comment or rewriting an existing one.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub content: String,
}
