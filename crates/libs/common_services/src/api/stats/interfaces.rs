use serde::Serialize;
use utoipa::ToSchema;

/// Per-user totals for the profile dashboard. Photo and storage figures
/// cover the albums the user owns, whoever uploaded into them.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    pub album_count: i64,
    pub photo_count: i64,
    pub favorite_count: i64,
    pub storage_bytes: i64,
    pub storage_used: String,
}
