//! Argon2 password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password into an argon2id PHC string.
///
/// # Arguments
/// - `password` - Plain-text password
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash including the random salt
/// - `Err(AppError::InternalErr(PasswordHash))` - Salt encoding or hashing failed
pub fn hash(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| InternalError::PasswordHash {
        reason: e.to_string(),
    })?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash {
            reason: e.to_string(),
        })?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let hashed = hash("password1").unwrap();

        assert!(hashed.starts_with("$argon2id$"));
        assert!(verify("password1", &hashed));
        assert!(!verify("password2", &hashed));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!verify("password1", "not-a-hash"));
    }
}
