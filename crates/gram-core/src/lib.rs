//! # Gram Core
//!
//! The domain layer of the Gram API.
//! This crate contains the record types, the query layer services and the
//! ports they depend on, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::{PostService, UserService};
