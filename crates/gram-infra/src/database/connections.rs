#[cfg(feature = "postgres")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

#[cfg(feature = "postgres")]
use super::{PostgresPostRepository, PostgresUserRepository};

/// Configuration for the store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Upper bound for every individual store call.
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
            connect_timeout: Duration::from_secs(10),
            query_timeout: Duration::from_secs(10),
        }
    }
}

/// Process-wide connection pool, shared by every in-flight request.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let users = db.user_repository();
/// let posts = db.post_repository();
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
    pub query_timeout: Duration,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect and verify the store is reachable.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.query_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        main.ping().await?;
        tracing::info!(
            pool = config.max_connections,
            query_timeout = ?config.query_timeout,
            "Database connected"
        );

        Ok(Self {
            main: Arc::new(main),
            query_timeout: config.query_timeout,
        })
    }

    pub fn user_repository(&self) -> PostgresUserRepository {
        PostgresUserRepository::new(Arc::clone(&self.main), self.query_timeout)
    }

    pub fn post_repository(&self) -> PostgresPostRepository {
        PostgresPostRepository::new(Arc::clone(&self.main), self.query_timeout)
    }
}
