use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::hash_password;
use crate::api::auth::hashing::verify_password;
use crate::api::auth::interfaces::{AuthClaims, CreateUser, Tokens};
use crate::api::auth::token::{
    RefreshTokenParts, generate_refresh_token_parts, split_refresh_token, verify_token,
};
use crate::database::DbError;
use crate::database::app_user::{User, UserWithPassword};
use crate::database::refresh_token_store::RefreshTokenStore;
use crate::database::user_store::UserStore;
use app_state::constants;
use axum::Json;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::info;

/// Authenticates a user based on email and password.
///
/// # Errors
///
/// * `AuthError::InvalidCredentials` if the email or password is incorrect.
/// * `sqlx::Error` for database-related issues.
pub async fn authenticate_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<UserWithPassword, AuthError> {
    let user = UserStore::find_by_email_with_password(pool, email)
        .await
        .map_err(Into::<AuthError>::into)?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = verify_password(password.as_ref(), &user.password)?;
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// A light shape check, enough to catch obvious typos without trying
/// to out-clever the mail server.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Creates a new user account.
///
/// # Errors
///
/// * `AuthError::Validation` when a field is empty or the email is malformed.
/// * `AuthError::UserAlreadyExists` if a user with the given email already exists.
/// * `AuthError::Internal` for hashing errors.
pub async fn create_user(pool: &SqlitePool, payload: &CreateUser) -> Result<User, AuthError> {
    if payload.email.is_empty() || payload.name.is_empty() || payload.password.is_empty() {
        return Err(AuthError::Validation("All fields are required".to_string()));
    }
    if !is_valid_email(&payload.email) {
        return Err(AuthError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }

    let hashed = hash_password(payload.password.as_ref())?;
    info!(
        "Creating user email={}, name={}",
        payload.email, payload.name
    );
    match UserStore::create(pool, &payload.email, &payload.name, &hashed).await {
        Ok(user) => Ok(user),
        Err(DbError::UniqueViolation(_)) => Err(AuthError::UserAlreadyExists),
        Err(e) => Err(e.into()),
    }
}

/// Stores a refresh token in the database.
///
/// # Errors
///
/// * `sqlx::Error` for database-related issues.
pub async fn store_refresh_token<'c, E>(
    executor: E,
    user_id: i64,
    parts: &RefreshTokenParts,
) -> Result<(), AuthError>
where
    E: Executor<'c, Database = Sqlite>,
{
    let exp = Utc::now() + Duration::days(constants().auth.refresh_token_expiry_days);
    RefreshTokenStore::insert(executor, user_id, &parts.selector, &parts.verifier_hash, exp)
        .await
        .map_err(Into::<AuthError>::into)?;
    Ok(())
}

/// Creates a new access token for a given user ID.
///
/// # Errors
///
/// * `jsonwebtoken::Error` if token encoding fails.
pub fn create_access_token(jwt_secret: &str, user_id: i64) -> Result<(String, u64), AuthError> {
    let exp =
        (Utc::now() + Duration::minutes(constants().auth.access_token_expiry_minutes)).timestamp();
    let claims = AuthClaims { sub: user_id, exp };
    let access_token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(Into::<AuthError>::into)?;

    Ok((access_token, exp as u64))
}

/// Handles refresh token rotation, invalidating the old token and issuing a new pair.
///
/// # Errors
/// * `AuthError::InvalidToken` if the provided refresh token is malformed or invalid.
/// * `AuthError::RefreshTokenExpiredOrNotFound` if the refresh token is not found or has expired.
/// * `AuthError::UserNotFound` if the user associated with the token cannot be found.
/// * `sqlx::Error` for database transaction issues.
pub async fn refresh_tokens(
    pool: &SqlitePool,
    jwt_secret: &str,
    raw_token: &str,
) -> Result<Json<Tokens>, AuthError> {
    let (selector, verifier_bytes) = split_refresh_token(raw_token)?;
    let record = RefreshTokenStore::find_by_selector(pool, &selector)
        .await
        .map_err(Into::<AuthError>::into)?
        .filter(|record| record.expires_at > Utc::now())
        .ok_or(AuthError::RefreshTokenExpiredOrNotFound)?;

    if !verify_token(&verifier_bytes, &record.verifier_hash)? {
        // If the verifier is wrong, assume token theft and delete all refresh tokens for that user.
        RefreshTokenStore::delete_all_for_user(pool, record.user_id)
            .await
            .ok(); // Ignore error if deletion fails
        return Err(AuthError::InvalidToken);
    }

    let user = UserStore::find_by_id(pool, record.user_id)
        .await
        .map_err(Into::<AuthError>::into)?
        .ok_or(AuthError::UserNotFound)?;

    let mut tx = pool.begin().await?;
    RefreshTokenStore::delete_by_selector(&mut *tx, &selector)
        .await
        .map_err(Into::<AuthError>::into)?;

    let new_parts = generate_refresh_token_parts()?;
    store_refresh_token(&mut *tx, record.user_id, &new_parts).await?;

    tx.commit().await?;

    let (access_token, expiry) = create_access_token(jwt_secret, user.id)?;
    Ok(Json(Tokens {
        expiry,
        access_token,
        refresh_token: new_parts.raw_token,
    }))
}

/// Deletes the refresh token matching the provided one, effectively logging out the user.
///
/// # Errors
///
/// * `sqlx::Error` for database-related issues.
pub async fn logout_user(pool: &SqlitePool, raw_token: &str) -> Result<StatusCode, AuthError> {
    // If the token is malformed, we just ignore it and succeed silently.
    if let Ok((selector, verifier_bytes)) = split_refresh_token(raw_token)
        && let Some(record) = RefreshTokenStore::find_by_selector(pool, &selector)
            .await
            .map_err(Into::<AuthError>::into)?
        && verify_token(&verifier_bytes, &record.verifier_hash).unwrap_or(false)
    {
        RefreshTokenStore::delete_by_selector(pool, &selector)
            .await
            .map_err(Into::<AuthError>::into)?;
    }
    // Logout should always appear successful to prevent token enumeration attacks.
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_test_pool;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    fn payload(email: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user example@mail.com"));
        assert!(!is_valid_email("plainaddress"));
    }

    #[tokio::test]
    async fn register_then_login() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = create_user(&pool, &payload("me@example.com"))
            .await
            .map_err(|e| color_eyre::eyre::eyre!("create: {e:?}"))?;
        assert_eq!(user.email, "me@example.com");

        let authed = authenticate_user(&pool, "me@example.com", "hunter2").await;
        assert!(authed.is_ok());

        let wrong = authenticate_user(&pool, "me@example.com", "wrong").await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

        let unknown = authenticate_user(&pool, "ghost@example.com", "hunter2").await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        Ok(())
    }

    #[tokio::test]
    async fn register_validates_input() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;

        let mut missing = payload("me@example.com");
        missing.name = String::new();
        assert!(matches!(
            create_user(&pool, &missing).await,
            Err(AuthError::Validation(_))
        ));

        let bad_email = payload("not-an-email");
        assert!(matches!(
            create_user(&pool, &bad_email).await,
            Err(AuthError::Validation(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        create_user(&pool, &payload("me@example.com"))
            .await
            .map_err(|e| color_eyre::eyre::eyre!("create: {e:?}"))?;

        let second = create_user(&pool, &payload("me@example.com")).await;
        assert!(matches!(second, Err(AuthError::UserAlreadyExists)));
        Ok(())
    }

    #[tokio::test]
    async fn access_token_carries_the_user_id() -> color_eyre::Result<()> {
        let (token, expiry) =
            create_access_token("secret", 42).map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        let decoded = decode::<AuthClaims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::default(),
        )?;
        assert_eq!(decoded.claims.sub, 42);
        assert_eq!(decoded.claims.exp as u64, expiry);
        Ok(())
    }

    #[tokio::test]
    async fn refresh_rotates_and_invalidates_the_old_token() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = crate::test_support::seed_user(&pool, "me@example.com", "Me").await?;
        let parts = generate_refresh_token_parts().map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        store_refresh_token(&pool, user.id, &parts)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;

        let Json(tokens) = refresh_tokens(&pool, "secret", &parts.raw_token)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        assert!(!tokens.refresh_token.is_empty());
        assert_ne!(tokens.refresh_token, parts.raw_token);

        // The old token was rotated out.
        let replay = refresh_tokens(&pool, "secret", &parts.raw_token).await;
        assert!(matches!(
            replay,
            Err(AuthError::RefreshTokenExpiredOrNotFound)
        ));

        // The rotated token works.
        let again = refresh_tokens(&pool, "secret", &tokens.refresh_token).await;
        assert!(again.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn wrong_verifier_wipes_every_session() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = crate::test_support::seed_user(&pool, "me@example.com", "Me").await?;
        let stolen = generate_refresh_token_parts().map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        let other = generate_refresh_token_parts().map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        store_refresh_token(&pool, user.id, &stolen)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        store_refresh_token(&pool, user.id, &other)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;

        // Right selector, wrong verifier: looks like a stolen selector.
        let mut forged_bytes = URL_SAFE_NO_PAD.decode(&stolen.raw_token)?;
        for byte in &mut forged_bytes[16..] {
            *byte = byte.wrapping_add(1);
        }
        let forged = URL_SAFE_NO_PAD.encode(&forged_bytes);

        let result = refresh_tokens(&pool, "secret", &forged).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));

        // Theft response dropped the user's other session too.
        let other_session = refresh_tokens(&pool, "secret", &other.raw_token).await;
        assert!(matches!(
            other_session,
            Err(AuthError::RefreshTokenExpiredOrNotFound)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn expired_refresh_token_is_rejected() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = crate::test_support::seed_user(&pool, "me@example.com", "Me").await?;
        let parts = generate_refresh_token_parts().map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        RefreshTokenStore::insert(
            &pool,
            user.id,
            &parts.selector,
            &parts.verifier_hash,
            Utc::now() - Duration::days(1),
        )
        .await?;

        let result = refresh_tokens(&pool, "secret", &parts.raw_token).await;
        assert!(matches!(
            result,
            Err(AuthError::RefreshTokenExpiredOrNotFound)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn logout_is_silent_for_garbage_and_real_tokens_alike() -> color_eyre::Result<()> {
        let pool = create_test_pool().await?;
        let user = crate::test_support::seed_user(&pool, "me@example.com", "Me").await?;
        let parts = generate_refresh_token_parts().map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        store_refresh_token(&pool, user.id, &parts)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;

        let status = logout_user(&pool, &parts.raw_token)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("{e:?}"))?;
        assert_eq!(status, StatusCode::NO_CONTENT);

        // The session is gone.
        let replay = refresh_tokens(&pool, "secret", &parts.raw_token).await;
        assert!(matches!(
            replay,
            Err(AuthError::RefreshTokenExpiredOrNotFound)
        ));

        // Garbage tokens do not leak whether anything matched.
        let garbage = logout_user(&pool, "garbage").await;
        assert!(matches!(garbage, Ok(StatusCode::NO_CONTENT)));
        Ok(())
    }
}
