use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateName {
    pub name: String,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmail {
    pub email: String,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassword {
    #[schema(value_type = String, format = "password", example = "my-secret-password")]
    pub current_password: String,
    #[schema(value_type = String, format = "password", example = "my-new-password")]
    pub new_password: String,
}
