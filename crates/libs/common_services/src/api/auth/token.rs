use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, rng};

/// A freshly minted refresh token: the raw form handed to the client plus
/// the selector and hashed verifier that go into the database.
pub struct RefreshTokenParts {
    pub raw_token: String,
    pub selector: String,
    pub verifier_hash: String,
}

/// Mints a refresh token. The selector half is stored in the clear for
/// lookup; the verifier half is only ever stored hashed.
///
/// # Errors
///
/// * `AuthError::Internal` if hashing the verifier fails.
pub fn generate_refresh_token_parts() -> Result<RefreshTokenParts, AuthError> {
    let mut raw_bytes = [0u8; 32];
    rng().fill_bytes(&mut raw_bytes);

    let selector_bytes = &raw_bytes[..16];
    let verifier_bytes = &raw_bytes[16..];

    let selector = URL_SAFE_NO_PAD.encode(selector_bytes);
    let raw_token = URL_SAFE_NO_PAD.encode(raw_bytes);
    let verifier_hash = hash_password(verifier_bytes)?;

    Ok(RefreshTokenParts {
        raw_token,
        selector,
        verifier_hash,
    })
}

/// Splits a presented refresh token back into its selector and verifier
/// bytes.
///
/// # Errors
///
/// * `AuthError::InvalidToken` if the token is not base64 or the wrong length.
pub fn split_refresh_token(token: &str) -> Result<(String, Vec<u8>), AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| AuthError::InvalidToken)?;

    if bytes.len() != 32 {
        return Err(AuthError::InvalidToken);
    }

    let selector = URL_SAFE_NO_PAD.encode(&bytes[..16]);
    Ok((selector, bytes[16..].to_vec()))
}

/// Checks presented verifier bytes against the stored hash.
///
/// # Errors
///
/// * `AuthError::Internal` if the stored hash cannot be parsed.
pub fn verify_token(verifier_bytes: &[u8], verifier_hash: &str) -> Result<bool, AuthError> {
    Ok(verify_password(verifier_bytes, verifier_hash)?)
}
