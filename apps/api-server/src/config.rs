//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use gram_core::domain::DEFAULT_MAX_LIMIT;
use gram_infra::database::DatabaseConfig;

/// How account passwords are digested before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    /// Unsalted SHA-256, hex encoded. Compatible with existing records.
    #[default]
    Sha256,
    /// Salted Argon2id PHC strings.
    Argon2,
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(format!("unknown password scheme '{other}'")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs against the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub password_scheme: PasswordScheme,
    pub max_page_limit: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str| get(key).and_then(|s| s.parse::<u64>().ok());

        let database = get("DATABASE_URL").map(|url| {
            let mut db = DatabaseConfig::new(url);
            if let Some(max) = get("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
                db.max_connections = max;
            }
            if let Some(min) = get("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
                db.min_connections = min;
            }
            if let Some(secs) = parsed("DB_CONNECT_TIMEOUT_SECS") {
                db.connect_timeout = Duration::from_secs(secs);
            }
            if let Some(secs) = parsed("DB_QUERY_TIMEOUT_SECS") {
                db.query_timeout = Duration::from_secs(secs);
            }
            db
        });

        let password_scheme = match get("PASSWORD_SCHEME") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to sha256");
                PasswordScheme::Sha256
            }),
            None => PasswordScheme::default(),
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            password_scheme,
            max_page_limit: parsed("MAX_PAGE_LIMIT").unwrap_or(DEFAULT_MAX_LIMIT),
        }
    }
}
