use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::SysRng;

/// Checks a candidate secret against a stored PHC hash string.
/// # Errors
///
/// * The stored hash does not parse as a PHC string.
pub fn verify_password(password: &[u8], hash: &str) -> color_eyre::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;
    let verified = Argon2::default()
        .verify_password(password, &parsed_hash)
        .is_ok();
    Ok(verified)
}

/// Hashes a secret with Argon2 and a fresh random salt. Refresh-token
/// verifiers go through here as well, not just passwords.
/// # Errors
///
/// * Salt generation or the hash computation itself fails.
pub fn hash_password(password: &[u8]) -> color_eyre::Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::try_from_rng(&mut SysRng)?;
    let password_hash = argon2.hash_password(password, &salt)?.to_string();
    Ok(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() -> color_eyre::Result<()> {
        let hash = hash_password(b"hunter2")?;
        assert!(verify_password(b"hunter2", &hash)?);
        assert!(!verify_password(b"hunter3", &hash)?);
        Ok(())
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password(b"hunter2", "not-a-phc-string").is_err());
    }
}
