//! Application state - shared across all handlers.

use std::sync::Arc;

use gram_core::ports::{PasswordService, PostRepository, UserRepository};
use gram_core::{PostService, UserService};
use gram_infra::database::{InMemoryPostRepository, InMemoryUserRepository};
use gram_infra::password::Sha256PasswordService;

#[cfg(feature = "postgres")]
use gram_infra::database::DatabaseConnections;

#[cfg(feature = "argon2")]
use gram_infra::password::Argon2PasswordService;

use crate::config::{AppConfig, PasswordScheme};

/// Shared application state. Holds no mutable data of its own; every
/// request goes straight to the store through these services.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
}

/// Failures that prevent the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to connect to the store: {0}")]
    Store(String),

    #[cfg(not(feature = "postgres"))]
    #[error("DATABASE_URL is set but the server was built without the `postgres` feature")]
    PostgresDisabled,

    #[cfg(not(feature = "argon2"))]
    #[error("PASSWORD_SCHEME=argon2 requires the `argon2` feature")]
    Argon2Disabled,
}

impl AppState {
    /// Wire services over the given repositories.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        max_page_limit: u64,
    ) -> Self {
        Self {
            users: UserService::new(user_repo.clone(), passwords),
            posts: PostService::new(post_repo, user_repo).with_max_page_limit(max_page_limit),
        }
    }

    /// State backed by the in-memory store and SHA-256 digests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(Sha256PasswordService::new()),
            gram_core::domain::DEFAULT_MAX_LIMIT,
        )
    }

    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let passwords = password_service(config.password_scheme)?;

        let (user_repo, post_repo) = match &config.database {
            Some(db_config) => connect_store(db_config).await?,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
                let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
                (users, posts)
            }
        };

        tracing::info!(
            password_scheme = ?config.password_scheme,
            max_page_limit = config.max_page_limit,
            "Application state initialized"
        );

        Ok(Self::new(user_repo, post_repo, passwords, config.max_page_limit))
    }
}

fn password_service(scheme: PasswordScheme) -> Result<Arc<dyn PasswordService>, StartupError> {
    match scheme {
        PasswordScheme::Sha256 => Ok(Arc::new(Sha256PasswordService::new())),
        #[cfg(feature = "argon2")]
        PasswordScheme::Argon2 => Ok(Arc::new(Argon2PasswordService::new())),
        #[cfg(not(feature = "argon2"))]
        PasswordScheme::Argon2 => Err(StartupError::Argon2Disabled),
    }
}

#[cfg(feature = "postgres")]
async fn connect_store(
    config: &gram_infra::database::DatabaseConfig,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn PostRepository>), StartupError> {
    let connections = DatabaseConnections::init(config)
        .await
        .map_err(|e| StartupError::Store(e.to_string()))?;

    Ok((
        Arc::new(connections.user_repository()),
        Arc::new(connections.post_repository()),
    ))
}

#[cfg(not(feature = "postgres"))]
async fn connect_store(
    _config: &gram_infra::database::DatabaseConfig,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn PostRepository>), StartupError> {
    Err(StartupError::PostgresDisabled)
}
