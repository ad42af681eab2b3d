// src/auth/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Salted, memory-hard digest of `password`. The salt and algorithm
/// parameters are embedded in the PHC string.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(h) => h,
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
    fn correct_password_verifies() {
        let hash = hash_password("pw1").unwrap();
        assert!(verify_password("pw1", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("pw1").unwrap();
        assert!(!verify_password("pw2", &hash));
    }

    #[test]
    fn garbage_hash_fails_instead_of_panicking() {
        assert!(!verify_password("pw1", "not-a-phc-string"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let a = hash_password("pw1").unwrap();
        let b = hash_password("pw1").unwrap();
        assert_ne!(a, b);
    }
}
