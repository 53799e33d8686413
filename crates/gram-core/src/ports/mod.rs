//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod password;
mod repository;

pub use password::{PasswordError, PasswordService};
pub use repository::{BaseRepository, PostRepository, UserRepository};
