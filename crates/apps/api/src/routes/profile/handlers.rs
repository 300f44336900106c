//! Handlers for account self-service: name, email and password changes.

use crate::api_state::ApiContext;
use axum::{Extension, Json, extract::State, http::StatusCode};
use common_services::api::profile::error::ProfileError;
use common_services::api::profile::interfaces::{UpdateEmail, UpdateName, UpdatePassword};
use common_services::api::profile::service;
use common_services::database::app_user::User;

/// Rename the current account.
#[utoipa::path(
    put,
    path = "/profile/name",
    tag = "Profile",
    request_body = UpdateName,
    responses(
        (status = 200, description = "Name updated", body = User),
        (status = 400, description = "Name too short"),
        (status = 401, description = "Authentication required"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_name(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateName>,
) -> Result<Json<User>, ProfileError> {
    let user = service::update_name(&context.pool, user.id, &payload.name).await?;
    Ok(Json(user))
}

/// Change the email on the current account.
#[utoipa::path(
    put,
    path = "/profile/email",
    tag = "Profile",
    request_body = UpdateEmail,
    responses(
        (status = 200, description = "Email updated", body = User),
        (status = 400, description = "Malformed email address"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Email already in use"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_email(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateEmail>,
) -> Result<Json<User>, ProfileError> {
    let user = service::update_email(&context.pool, user.id, &payload.email).await?;
    Ok(Json(user))
}

/// Change the password after verifying the current one.
#[utoipa::path(
    put,
    path = "/profile/password",
    tag = "Profile",
    request_body = UpdatePassword,
    responses(
        (status = 204, description = "Password updated"),
        (status = 401, description = "Authentication required or wrong current password"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_password(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdatePassword>,
) -> Result<StatusCode, ProfileError> {
    service::update_password(
        &context.pool,
        user.id,
        &payload.current_password,
        &payload.new_password,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
