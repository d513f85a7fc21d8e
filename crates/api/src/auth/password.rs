//! Argon2id password hashing and the login credential check.
//!
//! Hashes are stored in PHC string format, so parameters and salt travel
//! with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use dsmovie_core::error::CoreError;

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// There is no sign-up route; this is for seeding users in tests and
/// tooling. Login only calls [`check_password`].
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check `password` against a stored PHC hash.
///
/// A mismatch is an `AuthenticationFailure` carrying `rejection`, so callers
/// can give unknown users and wrong passwords the same answer. A stored hash
/// that does not parse is `Internal`.
pub fn check_password(password: &str, stored_hash: &str, rejection: &str) -> Result<(), CoreError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| CoreError::Internal(format!("Stored password hash is malformed: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(password_hash::Error::Password) => {
            Err(CoreError::AuthenticationFailure(rejection.to_string()))
        }
        Err(e) => Err(CoreError::Internal(format!("Password verification error: {e}"))),
    }
}
