//! One-way password hashing for teacher accounts.
//!
//! Hashes are Argon2id PHC strings with a random per-hash salt. This crate only
//! ever produces hashes; checking a login attempt against one belongs to the
//! authentication flow.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    /// Argon2 rejected the input or its parameters.
    #[error("Failed to hash password: {0}")]
    Hash(String),
}

/// Hashes a plaintext credential with Argon2id and the default parameters.
///
/// # Arguments
/// - `plaintext` - Credential to hash; never stored
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash such as `$argon2id$v=19$m=19456,t=2,p=1$...`
/// - `Err(PasswordError::Hash)` - Hashing failed
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}
