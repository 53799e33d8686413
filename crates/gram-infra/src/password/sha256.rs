//! Unsalted SHA-256 digest, hex encoded.
//!
//! Identical passwords produce identical digests. This is the legacy storage
//! format; `Argon2PasswordService` is the salted alternative.

use sha2::{Digest, Sha256};

use gram_core::ports::{PasswordError, PasswordService};

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordService;

impl Sha256PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordService for Sha256PasswordService {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(hex::encode(Sha256::digest(password.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let service = Sha256PasswordService::new();
        assert_eq!(
            service.hash("hello world").unwrap(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_digest_is_deterministic_hex() {
        let service = Sha256PasswordService::new();
        let password = "secure_password_123";

        let digest = service.hash(password).unwrap();
        assert_ne!(digest, password);
        assert_eq!(digest.len(), 64);
        assert!(hex::decode(&digest).is_ok());
        assert_eq!(digest, service.hash(password).unwrap());
        assert_ne!(digest, service.hash("wrong_password").unwrap());
    }
}
