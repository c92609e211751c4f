//! Argon2id password hashing and verification.
//!
//! Hashes are stored in PHC string format, so the algorithm parameters and
//! the random salt travel with the hash itself.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use super::AuthError;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// # Errors
///
/// Returns [`AuthError::Hashing`] if the hasher rejects the input.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Returns `true` if `stored_hash` is a PHC string this module can verify.
///
/// Hashes from other schemes (e.g. bcrypt `$2b$...`) are not.
#[must_use]
pub fn is_supported_hash(stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|hash| hash.algorithm == argon2::ARGON2ID_IDENT)
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Returns `Ok(true)` on a match and `Ok(false)` on a mismatch.
///
/// # Errors
///
/// Returns [`AuthError::Hashing`] if the stored hash is not a valid PHC
/// string. Neither the password nor the hash appear in the error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|_| AuthError::Hashing("stored admin password hash is malformed".to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}
