//! Password hashing and verification.
//!
//! Thin wrapper over bcrypt at its default cost factor. `check` delegates
//! to bcrypt's comparison, which runs in constant time with respect to the
//! position of the first mismatching byte.

use bcrypt::{BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored digest.
pub fn check(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_matching_password() {
        let digest = hash("correct horse battery staple").unwrap();
        assert!(check("correct horse battery staple", &digest).unwrap());
    }

    #[test]
    fn test_check_rejects_wrong_password() {
        let digest = hash("secret1").unwrap();
        assert!(!check("secret2", &digest).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        // Two hashes of the same input must differ.
        let a = bcrypt::hash("same-input", 4).unwrap();
        let b = bcrypt::hash("same-input", 4).unwrap();
        assert_ne!(a, b);
    }
}
