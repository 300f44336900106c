use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::auth::service::is_valid_email;
use crate::api::profile::error::ProfileError;
use crate::database::app_user::User;
use crate::database::user_store::UserStore;
use sqlx::SqlitePool;
use tracing::info;

/// Rename the account. The name is trimmed and must keep at least two
/// characters.
pub async fn update_name(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
) -> Result<User, ProfileError> {
    let name = name.trim();
    if name.chars().count() < 2 {
        return Err(ProfileError::Validation(
            "Name must be at least 2 characters".to_string(),
        ));
    }
    let user = UserStore::update(pool, user_id, Some(name), None, None).await?;
    Ok(user)
}

/// Change the account email, keeping addresses unique.
pub async fn update_email(
    pool: &SqlitePool,
    user_id: i64,
    email: &str,
) -> Result<User, ProfileError> {
    if !is_valid_email(email) {
        return Err(ProfileError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }
    let user = UserStore::update(pool, user_id, None, Some(email), None).await?;
    info!("User {} changed their email", user_id);
    Ok(user)
}

/// Change the password after verifying the current one.
pub async fn update_password(
    pool: &SqlitePool,
    user_id: i64,
    current_password: &str,
    new_password: &str,
) -> Result<(), ProfileError> {
    if current_password.is_empty() || new_password.is_empty() {
        return Err(ProfileError::Validation(
            "Current and new password are required".to_string(),
        ));
    }

    let user = UserStore::find_by_id_with_password(pool, user_id)
        .await?
        .ok_or(ProfileError::UserNotFound)?;

    if !verify_password(current_password.as_ref(), &user.password)? {
        return Err(ProfileError::WrongPassword);
    }

    let hashed = hash_password(new_password.as_ref())?;
    UserStore::update(pool, user_id, None, None, Some(&hashed)).await?;
    info!("User {} changed their password", user_id);
    Ok(())
}
