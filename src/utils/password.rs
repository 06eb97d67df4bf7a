use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::AppResult;

/// Hashes a password with Argon2id, returning the PHC string stored in
/// `app_users.password`.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// Verifies a password against a stored PHC string. A mismatch is
/// `Ok(false)`; only a malformed stored hash is an error.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_produces_argon2_phc_string() {
        let hash = hash_password("hunter2hunter2").expect("hash");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn correct_password_verifies() {
        let hash = hash_password("hunter2hunter2").expect("hash");
        assert!(verify_password("hunter2hunter2", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_without_error() {
        let hash = hash_password("hunter2hunter2").expect("hash");
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let hash1 = hash_password("hunter2hunter2").unwrap();
        let hash2 = hash_password("hunter2hunter2").unwrap();
        assert_ne!(hash1, hash2);
        assert!(verify_password("hunter2hunter2", &hash1).unwrap());
        assert!(verify_password("hunter2hunter2", &hash2).unwrap());
    }
}
