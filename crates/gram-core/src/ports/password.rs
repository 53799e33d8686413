//! Password digest port.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Replace a plaintext password with its stored digest.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;
}

/// Password digest errors.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}
