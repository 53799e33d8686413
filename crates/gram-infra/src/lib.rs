//! # Gram Infrastructure
//!
//! Concrete implementations of the ports defined in `gram-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store and SHA-256 only
//! - `postgres` - PostgreSQL store via SeaORM
//! - `argon2` - Salted Argon2id password hashing

pub mod database;
pub mod password;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};
pub use password::Sha256PasswordService;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

#[cfg(feature = "argon2")]
pub use password::Argon2PasswordService;
