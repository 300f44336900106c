use crate::database::share::SharePermission;
use serde::Deserialize;
use utoipa::ToSchema;

/// Grant request, addressed by email so owners can share with people
/// whose user id they never see. Permission defaults to `view`.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    pub email: String,
    pub permission: Option<SharePermission>,
}
