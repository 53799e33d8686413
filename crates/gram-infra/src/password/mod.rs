//! Password digest implementations.

#[cfg(feature = "argon2")]
mod argon2id;
mod sha256;

#[cfg(feature = "argon2")]
pub use argon2id::Argon2PasswordService;
pub use sha256::Sha256PasswordService;
