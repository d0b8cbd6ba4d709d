//! Password generation, hashing, and verification.
//!
//! Generated passwords are one-time display values; only the Argon2 hash
//! is ever persisted.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::constants::{PASSWORD_LENGTH, TOKEN_ALPHABET};
use crate::errors::AppError;

/// Generate a random plaintext password suitable for one-time display
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    (0..PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx]
        })
        .collect()
}

/// Hash a password with Argon2id and a fresh random salt
///
/// Returns the PHC string ($argon2id$v=19$...), which embeds the salt and
/// parameters needed for later verification.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::HashError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string
///
/// Malformed hashes verify false rather than erroring.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password_shape() {
        let password = generate_password();
        assert_eq!(password.len(), PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_alphanumeric()));
    }

    #[test]
    fn test_generated_passwords_differ() {
        let first = generate_password();
        let second = generate_password();
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = generate_password();
        let hash = hash_password(&password).unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&password, &hash));
        assert!(!verify_password("someOtherPassword", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash1 = hash_password("same input").unwrap();
        let hash2 = hash_password("same input").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("anything", "not a phc string"));
        assert!(!verify_password("anything", ""));
    }
}
