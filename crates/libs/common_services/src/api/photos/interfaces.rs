use axum::body::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A photo upload after the multipart form has been pulled apart.
#[derive(Debug)]
pub struct PhotoUpload {
    pub filename: String,
    pub data: Bytes,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub date_taken: Option<DateTime<Utc>>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPageParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<i64>,
    /// Page size, defaults to 50.
    pub limit: Option<i64>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSearchQuery {
    /// Free text matched against photo descriptions.
    pub q: Option<String>,
    /// Comma-separated tag list, any match qualifies.
    pub tags: Option<String>,
    pub album_id: Option<i64>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentPermissionResponse {
    pub allowed: bool,
}
