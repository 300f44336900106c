use crate::database::favorite::{Favorite, FavoritePhoto};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Marking twice is not an error; the response says which case it was.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteResponse {
    #[serde(flatten)]
    pub favorite: Favorite,
    pub already_favorite: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub action: ToggleAction,
    pub is_favorite: bool,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusResponse {
    pub is_favorite: bool,
}

/// One page of favorites plus the grand total for paging controls.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesPageResponse {
    pub favorites: Vec<FavoritePhoto>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
